//! Codec inventory records
//!
//! One [`MediaRecord`] per row of the input report. Fields are kept as the
//! raw strings the probing tool emitted; interpretation happens in
//! [`crate::classify`].

use serde::{Deserialize, Serialize};

/// Columns every input report must carry, in output order
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "path",
    "container",
    "size_bytes",
    "vcodec",
    "vprofile",
    "pix_fmt",
    "acodec",
    "subtitle_codecs",
];

/// Header of both output worklists
pub const OUTPUT_COLUMNS: [&str; 9] = [
    "path",
    "container",
    "size_bytes",
    "vcodec",
    "vprofile",
    "pix_fmt",
    "acodec",
    "subtitle_codecs",
    "reason",
];

/// A single media file as described by the codec inventory
///
/// Fields missing from a short row deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRecord {
    pub path: String,
    pub container: String,
    pub size_bytes: String,
    pub vcodec: String,
    pub vprofile: String,
    pub pix_fmt: String,
    pub acodec: String,
    /// May list several codecs, e.g. `subrip,hdmv_pgs_subtitle`
    pub subtitle_codecs: String,
}

impl MediaRecord {
    /// Fields of an output row, in [`OUTPUT_COLUMNS`] order
    pub fn output_fields<'a>(&'a self, reason: &'a str) -> [&'a str; 9] {
        [
            &self.path,
            &self.container,
            &self.size_bytes,
            &self.vcodec,
            &self.vprofile,
            &self.pix_fmt,
            &self.acodec,
            &self.subtitle_codecs,
            reason,
        ]
    }
}
