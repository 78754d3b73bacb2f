//! Rules command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::RulesArgs;
use crate::commands::helpers;
use crate::config::ConfigFile;
use crate::error::Result;
use crate::ui;

/// Run rules command
pub fn run(project: Option<PathBuf>, mode: Option<String>, args: RulesArgs) -> Result<()> {
    let ctx = helpers::load_context(project, mode.as_deref())?;

    if args.yaml {
        let file = ConfigFile {
            rules: Some(ctx.resolver.rules().rules().cloned().collect()),
            ..ConfigFile::default()
        };
        print!("{}", serde_yaml::to_string(&file)?);
        return Ok(());
    }

    ui::display_profile(ctx.resolver.mode());
    println!(
        "{} {}",
        Style::new().bold().apply_to("Source:"),
        ctx.config.source_dir.display()
    );
    println!(
        "{} {}",
        Style::new().bold().apply_to("Assets:"),
        ctx.config.assets_dir
    );
    println!("{}", Style::new().bold().apply_to("Rules:"));
    for (offset, rule) in ctx.resolver.rules().rules().enumerate() {
        ui::display_rule(offset + 1, rule);
    }

    Ok(())
}
