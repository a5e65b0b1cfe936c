use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the workspace without writing the bundle:\n    modwrap check\n\n\
                  Validate an explicit configuration:\n    modwrap check --config release.yaml")]
pub struct CheckArgs {
    /// Configuration file to use instead of modwrap.yaml
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}
