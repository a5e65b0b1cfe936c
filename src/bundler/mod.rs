//! The bundler: load fragments, render the wrapper, write the bundle
//!
//! A [`Bundler`] is a [`BundlerConfig`] plus the root directory every path
//! in the config is resolved against. The whole operation is synchronous
//! and strictly sequential: validate, load everything, render, then write.
//! All fragment reads complete before the output file is opened, so a
//! failed read never leaves a truncated bundle behind.

use std::path::{Path, PathBuf};

use crate::config::BundlerConfig;
use crate::error::{ModwrapError, Result};
use crate::fragment::Fragment;
use crate::template::Template;

/// Bundles fragments into a single wrapped module file
pub struct Bundler {
    config: BundlerConfig,
    root: PathBuf,
}

/// What a successful build produced
#[derive(Debug)]
pub struct BuildReport {
    /// Absolute-ish path the bundle was written to (root-joined)
    pub output: PathBuf,

    /// Size of the written bundle in bytes
    pub bytes: usize,

    /// Fragment names in the order they were read
    pub fragments: Vec<String>,
}

/// One verified manifest entry from a dry check
#[derive(Debug)]
pub struct CheckedFragment {
    pub name: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Result of a dry check: everything a build would need, nothing written
#[derive(Debug)]
pub struct CheckReport {
    pub fragments: Vec<CheckedFragment>,
    pub output: PathBuf,
}

impl Bundler {
    pub fn new(config: BundlerConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Build the bundle
    ///
    /// Validates the config, checks the manifest against the template's
    /// placeholders, reads every fragment in manifest order, renders, and
    /// writes the output file, truncating anything already there.
    pub fn build(&self) -> Result<BuildReport> {
        let template = self.prepare()?;
        let fragments = self.load_fragments()?;

        let text = template.render(&fragments)?;

        let output = self.root.join(&self.config.output);
        std::fs::write(&output, &text).map_err(|e| ModwrapError::BundleWriteFailed {
            path: output.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(BuildReport {
            output,
            bytes: text.len(),
            fragments: fragments.into_iter().map(|f| f.name).collect(),
        })
    }

    /// Run every check a build would run, without writing the bundle
    pub fn check(&self) -> Result<CheckReport> {
        self.prepare()?;

        let mut checked = Vec::with_capacity(self.config.fragments.len());
        for spec in &self.config.fragments {
            let fragment = Fragment::load(spec, &self.root)?;
            checked.push(CheckedFragment {
                name: fragment.name,
                path: spec.path.clone(),
                bytes: fragment.content.len(),
            });
        }

        Ok(CheckReport {
            fragments: checked,
            output: self.root.join(&self.config.output),
        })
    }

    /// Validate the config, load the template, and reconcile the two.
    /// Runs before any fragment I/O so mismatches fail fast.
    fn prepare(&self) -> Result<Template> {
        self.config.validate()?;
        let template = self.template()?;
        template.check_manifest(&self.config.fragments)?;
        Ok(template)
    }

    fn template(&self) -> Result<Template> {
        match &self.config.template {
            Some(path) => {
                let path = self.root.join(path);
                let text = read_template(&path)?;
                Template::parse(&text)
            }
            None => Template::builtin(),
        }
    }

    fn load_fragments(&self) -> Result<Vec<Fragment>> {
        self.config
            .fragments
            .iter()
            .map(|spec| Fragment::load(spec, &self.root))
            .collect()
    }
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ModwrapError::TemplateReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
