//! Build command implementation
//!
//! Loads the effective configuration, applies CLI overrides, and runs the
//! bundler. The confirmation message is printed only after the bundle has
//! been written.

use std::path::PathBuf;

use console::Style;

use crate::bundler::Bundler;
use crate::cli::BuildArgs;
use crate::commands::helpers;
use crate::error::Result;

/// Run build command
pub fn run(dir: Option<PathBuf>, verbose: bool, args: BuildArgs) -> Result<()> {
    let root = helpers::resolve_root(dir)?;
    let mut config = helpers::load_config(&root, args.config.as_deref())?;

    if let Some(output) = args.output {
        config.output = output;
    }
    // Resolve the message after overrides so a default message names the
    // path actually written.
    let message = config.message();

    let bundler = Bundler::new(config, root);
    let report = bundler.build()?;

    if verbose {
        let dim = Style::new().dim();
        for name in &report.fragments {
            println!("{}", dim.apply_to(format!("  + {}", name)));
        }
        println!("{}", dim.apply_to(format!("  = {} bytes", report.bytes)));
    }

    println!("{}", message);
    Ok(())
}
