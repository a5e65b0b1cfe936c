//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - check: Check command arguments
//! - init: Init command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod check;
pub mod completions;
pub mod init;

pub use build::BuildArgs;
pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use init::InitArgs;

/// Modwrap - module fragment bundler
///
/// Concatenate source fragments into a single wrapped module file.
#[derive(Parser, Debug)]
#[command(
    name = "modwrap",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundles source fragments into a single wrapped module file",
    long_about = "Modwrap reads an ordered manifest of source fragments, substitutes them into \
                  a wrapper template with named placeholders, and writes the result to one \
                  output file. With no configuration it reproduces the classic five-fragment \
                  mips.js bundle.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modwrap build                  \x1b[90m# Bundle using modwrap.yaml or the built-in manifest\x1b[0m\n   \
                  modwrap build -o out/mips.js   \x1b[90m# Override the output path\x1b[0m\n   \
                  modwrap check                  \x1b[90m# Validate manifest, template and fragments; write nothing\x1b[0m\n   \
                  modwrap init                   \x1b[90m# Write a modwrap.yaml describing the default manifest\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Root directory for fragments, config and output (defaults to current directory)
    #[arg(long = "dir", short = 'C', global = true, env = "MODWRAP_DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle the fragments into the output file
    Build(BuildArgs),

    /// Validate manifest, template and fragments without writing
    Check(CheckArgs),

    /// Write a modwrap.yaml for the default manifest
    Init(InitArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
