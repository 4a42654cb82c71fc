//! Triage configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Default location of the codec inventory report
pub const DEFAULT_INPUT_PATH: &str = "plex_codec_report.csv";

/// Default location of the audio-only worklist
pub const DEFAULT_AUDIO_OUTPUT_PATH: &str = "audio_fix_only.csv";

/// Default location of the full re-encode worklist
pub const DEFAULT_FULL_FIX_OUTPUT_PATH: &str = "full_video_fix.csv";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(TriageError::Config(format!(
                "unknown log format '{}' (expected 'pretty' or 'json')",
                other
            ))),
        }
    }
}

/// Triage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Codec inventory report to classify
    pub input_path: PathBuf,

    /// Where records needing only an audio re-encode are written
    pub audio_output_path: PathBuf,

    /// Where records needing a full video+audio re-encode are written
    pub full_fix_output_path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            audio_output_path: PathBuf::from(DEFAULT_AUDIO_OUTPUT_PATH),
            full_fix_output_path: PathBuf::from(DEFAULT_FULL_FIX_OUTPUT_PATH),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
