use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ScanError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScanError::ReadError { path, .. } => {
                format!("Could not read '{}'", path.display())
            }
            ScanError::WriteError { path, .. } => {
                format!("Could not write '{}'", path.display())
            }
            ScanError::TomlError(_) => "The configuration file could not be parsed".to_string(),
            ScanError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ScanError::PatternError(_) => {
                "A marker produced an invalid search pattern".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScanError::ReadError { .. } => {
                "Check that the path exists and is readable"
            }
            ScanError::WriteError { .. } => {
                "Check that the output directory is writable or pick another output path"
            }
            ScanError::TomlError(_) => "Fix the syntax or remove unknown keys from the configuration file",
            ScanError::InvalidConfigValueError { .. } => {
                "Markers must be plain identifiers and extensions must not start with '.'"
            }
            ScanError::PatternError(_) => "Use plain identifiers for markers",
            ScanError::SerializationError(_) | ScanError::ValidationError { .. } => {
                "Regenerate the manifest from the headers"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
