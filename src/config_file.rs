//! Configuration file support
//!
//! Loads triage configuration from TOML files. Every key is optional; a
//! missing key keeps its default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{LogFormat, TriageConfig};
use crate::error::{Result, TriageError};

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Input report settings
    #[serde(default)]
    pub input: InputSettings,
    /// Output worklist settings
    #[serde(default)]
    pub output: OutputSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSettings {
    /// Codec inventory report path
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Audio-only worklist path
    pub audio_only: Option<PathBuf>,
    /// Full re-encode worklist path
    pub full_fix: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| {
            TriageError::Config(format!("{}: {}", path.as_ref().display(), e))
        })
    }

    /// Convert to TriageConfig
    pub fn into_triage_config(self) -> Result<TriageConfig> {
        let defaults = TriageConfig::default();
        let (log_level, log_format) = match self.logging {
            Some(logging) => (
                logging.level.unwrap_or(defaults.log_level),
                match logging.format {
                    Some(format) => LogFormat::parse(&format)?,
                    None => defaults.log_format,
                },
            ),
            None => (defaults.log_level, defaults.log_format),
        };

        Ok(TriageConfig {
            input_path: self.input.path.unwrap_or(defaults.input_path),
            audio_output_path: self.output.audio_only.unwrap_or(defaults.audio_output_path),
            full_fix_output_path: self.output.full_fix.unwrap_or(defaults.full_fix_output_path),
            log_level,
            log_format,
        })
    }
}
