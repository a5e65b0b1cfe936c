use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle with the built-in manifest:\n    modwrap build\n\n\
                  Bundle a project in another directory:\n    modwrap -C emulator/ build\n\n\
                  Bundle with an explicit configuration:\n    modwrap build --config release.yaml\n\n\
                  Override the output path:\n    modwrap build -o out/mips.js")]
pub struct BuildArgs {
    /// Configuration file to use instead of modwrap.yaml
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the bundle to this path instead of the configured one
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
