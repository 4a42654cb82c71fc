//! Codec inventory reader

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::StringRecord;

use crate::error::{Result, TriageError};
use crate::record::{MediaRecord, REQUIRED_COLUMNS};

/// Read every record of a codec inventory report
///
/// The whole file is materialized before returning; the handle is closed on
/// return. Columns are matched by header name, extra columns are ignored.
/// A row shorter than the header leaves its trailing fields empty; fields
/// beyond the header are dropped.
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Vec<MediaRecord>> {
    let path = path.as_ref();
    let unreadable = |source: csv::Error| TriageError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TriageError::InputNotFound(path.to_path_buf()),
        _ => unreadable(e.into()),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = normalize_headers(reader.headers().map_err(unreadable)?);
    check_required_columns(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = fit_to_headers(row.map_err(unreadable)?, headers.len());
        records.push(
            row.deserialize::<MediaRecord>(Some(&headers))
                .map_err(unreadable)?,
        );
    }

    tracing::info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Strip a UTF-8 byte order mark from the first header
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name
            }
        })
        .collect()
}

/// Pad a short row with empty fields and drop fields beyond the header
fn fit_to_headers(mut row: StringRecord, width: usize) -> StringRecord {
    if row.len() > width {
        row.truncate(width);
    }
    while row.len() < width {
        row.push_field("");
    }
    row
}

/// Fail on the first required column the header lacks
fn check_required_columns(headers: &StringRecord) -> Result<()> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|name| name == **column))
    {
        Some(column) => Err(TriageError::MissingColumn(column.to_string())),
        None => Ok(()),
    }
}
