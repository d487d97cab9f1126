pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::ScanConfig;
pub use crate::core::{
    builder::ManifestBuilder,
    comments::strip_comments,
    engine::{ScanEngine, ScanOutcome},
    patterns::ActionPatterns,
    walker::find_files,
};
pub use domain::model::{Action, Field, Manifest};
pub use utils::error::{Result, ScanError};

/// Scans `root` with default settings and returns the manifest. Writes
/// nothing; unreadable files are logged and skipped.
pub fn scan_directory(root: impl AsRef<std::path::Path>) -> Result<Manifest> {
    let builder = ManifestBuilder::new(LocalStorage::new(), ScanConfig::default())?;
    Ok(builder.scan(root.as_ref()))
}
