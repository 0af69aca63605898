//! Configuration module.
//!
//! Provides `AppConfig` (column names for tabular mode + JSON output
//! options), `AppPaths` for the platform config directory, and TOML
//! persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ColumnsConfig, OutputConfig};
