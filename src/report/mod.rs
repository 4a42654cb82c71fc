//! Report I/O module
//!
//! This module handles the tabular files around the classifier:
//! - Reading the codec inventory report into typed records
//! - Header validation (required columns, read by name)
//! - Writing the audio-only and full-fix worklists

pub mod reader;
pub mod writer;

pub use reader::read_report;
pub use writer::write_partition;
