//! Codec Triage
//!
//! Sorts a media-library codec inventory (one CSV row per file, as produced
//! by an external probing tool) into two remediation worklists:
//! - files whose audio alone needs re-encoding (DTS, DCA, TrueHD)
//! - files that need a full video+audio re-encode (10-bit HEVC combined with
//!   problem audio or image-based subtitles)
//!
//! No media is opened here; the input report is the only source of truth.

pub mod classify;
pub mod config;
pub mod config_file;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod report;

#[cfg(test)]
mod integration;

pub use config::TriageConfig;
pub use error::{Result, TriageError};
pub use pipeline::{run, Summary, SummaryReport};
pub use record::MediaRecord;
