use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    assetplan completions --shell bash > ~/.bash_completion.d/assetplan\n\n\
                  Generate zsh completions:\n    assetplan completions --shell zsh > ~/.zfunc/_assetplan\n\n\
                  Generate fish completions:\n    assetplan completions --shell fish > ~/.config/fish/completions/assetplan.fish\n\n\
                  Generate PowerShell completions:\n    assetplan completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
