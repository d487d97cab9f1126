pub mod toml_config;

pub use toml_config::{MarkerConfig, ScanConfig, ScanSection};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "action-manifest")]
#[command(about = "Scans C++ headers for IAction declarations and writes a JSON manifest")]
pub struct CliConfig {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Where to write the manifest
    #[arg(default_value = "actions.json")]
    pub output: PathBuf,

    /// TOML file overriding markers and extensions
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,

    /// Scan and report without writing the manifest
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the scan settings named by `--config`, or the defaults.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        match &self.config {
            Some(path) => ScanConfig::from_file(path),
            None => Ok(ScanConfig::default()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root.to_string_lossy())?;
        validate_path("output", &self.output.to_string_lossy())?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_positional_defaults() {
        let cli = CliConfig::parse_from(["action-manifest"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.output, PathBuf::from("actions.json"));
        assert!(cli.config.is_none());
        assert!(!cli.dry_run);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_positional_overrides() {
        let cli = CliConfig::parse_from([
            "action-manifest",
            "engine/include",
            "build/gen/actions.json",
            "--config",
            "actions.toml",
            "-v",
        ]);
        assert_eq!(cli.root, PathBuf::from("engine/include"));
        assert_eq!(cli.output, PathBuf::from("build/gen/actions.json"));
        assert_eq!(cli.config, Some(PathBuf::from("actions.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_scan_config_defaults_without_file() {
        let cli = CliConfig::parse_from(["action-manifest"]);
        assert_eq!(cli.scan_config().unwrap(), ScanConfig::default());
    }
}
