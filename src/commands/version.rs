//! Version command implementation

use crate::config::BundlerConfig;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("modwrap {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!(
        "Default bundle: {} fragments -> {}",
        BundlerConfig::defaults().fragments.len(),
        BundlerConfig::defaults().output.display()
    );

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
