//! Check command implementation
//!
//! Runs every validation a build would run (configuration, template,
//! manifest pairing, fragment readability) and reports the result without
//! writing the bundle.

use std::path::PathBuf;

use console::Style;

use crate::bundler::Bundler;
use crate::cli::CheckArgs;
use crate::commands::helpers;
use crate::error::Result;

/// Run check command
pub fn run(dir: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let root = helpers::resolve_root(dir)?;
    let config = helpers::load_config(&root, args.config.as_deref())?;

    let bundler = Bundler::new(config, root);
    let report = bundler.check()?;

    let ok_style = Style::new().green().bold();
    println!(
        "{} manifest, template and fragments agree",
        ok_style.apply_to("OK")
    );
    println!();

    println!("Fragments ({}):", report.fragments.len());
    for fragment in &report.fragments {
        println!(
            "  {:<14} {} ({} bytes)",
            fragment.name,
            fragment.path.display(),
            fragment.bytes
        );
    }
    println!();
    println!("Bundle would be written to {}", report.output.display());

    Ok(())
}
