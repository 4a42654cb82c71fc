//! Triage run - read, classify, write

use std::fmt;

use crate::classify::triage;
use crate::config::TriageConfig;
use crate::error::Result;
use crate::report::{read_report, write_partition};

/// Worklist sizes after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub audio_only: usize,
    pub full_fix: usize,
}

/// Two-line report printed at the end of a run
pub struct SummaryReport<'a> {
    pub config: &'a TriageConfig,
    pub summary: Summary,
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}  (audio-only: {})",
            self.config.audio_output_path.display(),
            self.summary.audio_only
        )?;
        write!(
            f,
            "{}  (full-fix: {})",
            self.config.full_fix_output_path.display(),
            self.summary.full_fix
        )
    }
}

/// Classify the configured report and write both worklists
///
/// Any error aborts the run. A failure on the second worklist leaves the
/// first one in place.
pub fn run(config: &TriageConfig) -> Result<Summary> {
    tracing::info!("Classifying {}", config.input_path.display());
    let records = read_report(&config.input_path)?;

    let plan = triage(&records);
    tracing::info!(
        "{} audio-only, {} full-fix, {} need nothing",
        plan.audio_only.len(),
        plan.full_fix.len(),
        plan.skipped
    );

    let audio_only = write_partition(&config.audio_output_path, &plan.audio_only)?;
    let full_fix = write_partition(&config.full_fix_output_path, &plan.full_fix)?;

    Ok(Summary {
        audio_only,
        full_fix,
    })
}
