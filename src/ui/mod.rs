//! Human-readable output for resolutions, manifests and rule tables

use console::Style;

use crate::manifest::Manifest;
use crate::mode::Mode;
use crate::path_utils;
use crate::resolver::Resolution;
use crate::rules::Rule;

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Print the mode and the settings that follow from it
pub fn display_profile(mode: Mode) {
    let profile = mode.profile();
    println!(
        "{} {} (minify: {}, source maps: {}, split chunks: all)",
        Style::new().bold().apply_to("Mode:"),
        Style::new().cyan().apply_to(mode),
        on_off(profile.minify),
        on_off(profile.source_maps),
    );
}

/// Print one resolution on a single line
pub fn display_resolution(resolution: &Resolution) {
    let input = path_utils::to_forward_slashes(resolution.input_path());

    match resolution {
        Resolution::Resolved(asset) => println!(
            "  {} -> {} {}",
            input,
            Style::new().green().apply_to(&asset.output_path),
            Style::new().dim().apply_to(format!("[{}]", asset.category)),
        ),
        Resolution::Unmatched { .. } => println!(
            "  {} {}",
            input,
            Style::new().yellow().apply_to("(unmatched)")
        ),
    }
}

pub fn display_summary(manifest: &Manifest) {
    println!(
        "{} {} assets, {} unmatched",
        Style::new().bold().apply_to("Planned"),
        manifest.assets.len(),
        manifest.unmatched.len()
    );
}

/// Print one row of the rule table
pub fn display_rule(index: usize, rule: &Rule) {
    let chain = if rule.chain.is_empty() {
        "(none)".to_string()
    } else {
        rule.chain.join(" -> ")
    };

    println!(
        "  {:>2}. {:<7} {}",
        index,
        Style::new().bold().yellow().apply_to(rule.category),
        rule.matcher_label()
    );
    println!("      {} {}", Style::new().dim().apply_to("chain:"), chain);
}
