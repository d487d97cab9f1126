use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScanError};
use crate::utils::validation::{validate_extensions, validate_identifier, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scan settings, optionally loaded from a TOML file. Every key may be
/// omitted; the defaults describe the stock `IAction` / `IN()` / `OUT()`
/// convention over `.h` and `.hpp` files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub scan: ScanSection,
    pub markers: MarkerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSection {
    pub extensions: Vec<String>,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            extensions: vec!["h".to_string(), "hpp".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub action: String,
    pub input: String,
    pub output: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            action: "IAction".to_string(),
            input: "IN".to_string(),
            output: "OUT".to_string(),
        }
    }
}

impl ScanConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        validate_extensions("scan.extensions", &self.scan.extensions)?;
        validate_identifier("markers.action", &self.markers.action)?;
        validate_identifier("markers.input", &self.markers.input)?;
        validate_identifier("markers.output", &self.markers.output)?;
        Ok(())
    }
}

impl ConfigProvider for ScanConfig {
    fn extensions(&self) -> &[String] {
        &self.scan.extensions
    }

    fn action_marker(&self) -> &str {
        &self.markers.action
    }

    fn input_marker(&self) -> &str {
        &self.markers.input
    }

    fn output_marker(&self) -> &str {
        &self.markers.output
    }
}
