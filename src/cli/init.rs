use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write modwrap.yaml with the default manifest:\n    modwrap init\n\n\
                  Replace an existing modwrap.yaml:\n    modwrap init --force")]
pub struct InitArgs {
    /// Overwrite an existing modwrap.yaml
    #[arg(long, short = 'f')]
    pub force: bool,
}
