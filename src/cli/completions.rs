use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    modwrap completions bash > ~/.bash_completion.d/modwrap\n\n\
                  Generate zsh completions:\n    modwrap completions zsh > ~/.zfunc/_modwrap\n\n\
                  Generate fish completions:\n    modwrap completions fish > ~/.config/fish/completions/modwrap.fish\n\n\
                  Generate PowerShell completions:\n    modwrap completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
