//! Codec triage command
//!
//! Reads the codec inventory named in the config file and writes the
//! audio-only and full-fix worklists.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codec_triage::config::LogFormat;
use codec_triage::config_file::ConfigFile;
use codec_triage::{run, Result, SummaryReport, TriageConfig};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "codec-triage";

/// Config file read when no path is given
const DEFAULT_CONFIG_PATH: &str = "codec-triage.toml";

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let (config, config_error) = load_config(&config_path);

    init_logging(&config);
    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(e) = config_error {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path,
            e
        );
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    let summary = run(&config)?;
    println!(
        "{}",
        SummaryReport {
            config: &config,
            summary,
        }
    );

    Ok(())
}

/// Load the config file, falling back to defaults
///
/// Logging is not up yet, so a load failure is handed back for reporting.
fn load_config(path: &str) -> (TriageConfig, Option<codec_triage::TriageError>) {
    if !std::path::Path::new(path).exists() {
        return (TriageConfig::default(), None);
    }
    match ConfigFile::from_file(path).and_then(ConfigFile::into_triage_config) {
        Ok(config) => (config, None),
        Err(e) => (TriageConfig::default(), Some(e)),
    }
}

/// Initialize logging with tracing
///
/// Logs go to stderr; stdout carries only the summary.
fn init_logging(config: &TriageConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("codec_triage={}", config.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
