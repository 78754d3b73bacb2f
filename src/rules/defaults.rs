//! Built-in rule table
//!
//! Style sheets are split over three rules because their loader chains
//! differ; together they cover css, scss, sass and less.

use super::{Category, Rule};

/// Loader that pulls compiled CSS out of the script bundle into its own file
pub const CSS_EXTRACT_LOADER: &str = "css-extract-loader";

/// Step that emits the file unchanged as a separate resource
pub const ASSET_RESOURCE: &str = "asset-resource";

/// Get the default rule table, in precedence order
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(Category::Markup)
            .with_extensions(["html", "htm"])
            .with_chain(["html-loader"]),
        Rule::new(Category::Styles)
            .with_extensions(["css"])
            .with_chain([CSS_EXTRACT_LOADER, "css-loader"]),
        Rule::new(Category::Styles)
            .with_extensions(["scss", "sass"])
            .with_chain([CSS_EXTRACT_LOADER, "css-loader", "sass-loader"]),
        Rule::new(Category::Styles)
            .with_extensions(["less"])
            .with_chain([CSS_EXTRACT_LOADER, "css-loader", "less-loader"]),
        Rule::new(Category::Script)
            .with_extensions(["ts", "tsx", "cts", "mts"])
            .with_chain(["ts-loader"]),
        Rule::new(Category::Images)
            .with_extensions(["png", "jpg", "jpeg", "webp", "svg", "gif"])
            .with_chain([ASSET_RESOURCE]),
        Rule::new(Category::Fonts)
            .with_extensions(["woff", "woff2", "ttf"])
            .with_chain([ASSET_RESOURCE]),
        Rule::new(Category::Video)
            .with_extensions(["mp4", "avi", "wmv", "mov", "mkv", "flv", "webm", "mpeg"])
            .with_chain([ASSET_RESOURCE]),
        Rule::new(Category::Audio)
            .with_extensions(["mp3", "wav", "aac", "flac", "wma", "ogg"])
            .with_chain([ASSET_RESOURCE]),
    ]
}
