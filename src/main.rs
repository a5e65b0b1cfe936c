//! Modwrap - module fragment bundler
//!
//! A small build helper that reads an ordered manifest of source fragments,
//! substitutes them into a wrapper template with named placeholders, and
//! writes the result to a single output file.

use clap::Parser;

mod bundler;
mod cli;
mod commands;
mod config;
mod error;
mod fragment;
mod template;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.dir, cli.verbose, args),
        Commands::Check(args) => commands::check::run(cli.dir, args),
        Commands::Init(args) => commands::init::run(cli.dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
