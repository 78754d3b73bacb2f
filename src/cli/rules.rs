use clap::Parser;

/// Arguments for the rules command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the active rule table:\n    assetplan rules\n\n\
                  Dump it as a starting assetplan.yaml:\n    assetplan rules --yaml > assetplan.yaml")]
pub struct RulesArgs {
    /// Print the rule table as assetplan.yaml content
    #[arg(long)]
    pub yaml: bool,
}
