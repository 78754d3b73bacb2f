//! assetplan - asset pipeline rule resolver
//!
//! Matches front-end assets against an ordered rule table and computes where
//! each one is emitted, with stable names in development and content-hashed
//! names in production.
//!
//! ```ignore
//! use std::path::Path;
//! use assetplan::{mode::Mode, resolver::Resolver};
//!
//! let resolver = Resolver::builtin(Mode::Development);
//! let resolution = resolver.resolve(Path::new("fonts/brand.woff2"), b"");
//! assert_eq!(
//!     resolution.as_resolved().unwrap().output_path,
//!     "assets/fonts/brand.woff2"
//! );
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hash;
pub mod logging;
pub mod manifest;
pub mod mode;
pub mod path_utils;
pub mod progress;
pub mod resolver;
pub mod rules;
pub mod scan;
pub mod ui;
