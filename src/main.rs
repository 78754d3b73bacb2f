use clap::Parser;

use assetplan::cli::{Cli, Commands};
use assetplan::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.project, cli.mode, args),
        Commands::Plan(args) => commands::plan::run(cli.project, cli.mode, args),
        Commands::Rules(args) => commands::rules::run(cli.project, cli.mode, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
