//! Fragment loading
//!
//! A fragment is the full text of one input file, read into memory in a
//! single shot and immutable afterwards. Loading is the only place the
//! bundler touches input files; a missing file and an unreadable file are
//! reported as distinct errors so the fix is obvious from the diagnostic.

use std::path::Path;

use crate::config::FragmentSpec;
use crate::error::{ModwrapError, Result};

/// The loaded contents of one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Placeholder name this fragment binds to
    pub name: String,

    /// Raw file contents, unvalidated
    pub content: String,
}

impl Fragment {
    /// Read the fragment file named by `spec`, resolved against `root`
    pub fn load(spec: &FragmentSpec, root: &Path) -> Result<Self> {
        let path = root.join(&spec.path);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Self {
                name: spec.name.clone(),
                content,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ModwrapError::FragmentNotFound {
                    name: spec.name.clone(),
                    path: path.display().to_string(),
                })
            }
            Err(e) => Err(ModwrapError::FragmentReadFailed {
                name: spec.name.clone(),
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
