//! Worklist writer

use std::path::Path;

use crate::classify::reason;
use crate::error::{Result, TriageError};
use crate::record::{MediaRecord, OUTPUT_COLUMNS};

/// Write one worklist, replacing any existing file
///
/// Reasons are recomputed from each record. Returns the number of rows
/// written, not counting the header.
pub fn write_partition<P: AsRef<Path>>(path: P, records: &[&MediaRecord]) -> Result<usize> {
    let path = path.as_ref();
    let write_failure = |source: csv::Error| TriageError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(write_failure)?;

    writer.write_record(OUTPUT_COLUMNS).map_err(write_failure)?;
    for record in records {
        let reason = reason(record);
        writer
            .write_record(record.output_fields(&reason))
            .map_err(write_failure)?;
    }
    writer.flush().map_err(|e| write_failure(e.into()))?;

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}
