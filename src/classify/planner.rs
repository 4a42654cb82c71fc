//! Worklist planner - decides which remediation list a record belongs to

use std::fmt;

use crate::record::MediaRecord;

use super::predicates::{audio_problem, has_image_subs, is_hevc_10bit, normalize};

/// Why a record was flagged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonTag {
    /// 10-bit HEVC video
    Hevc10Bit,
    /// Problem audio codec (lowercased codec name)
    Audio(String),
    /// PGS or DVD subtitles
    ImageSubtitles,
}

impl fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonTag::Hevc10Bit => write!(f, "hevc_10bit"),
            ReasonTag::Audio(codec) => write!(f, "audio_{}", codec),
            ReasonTag::ImageSubtitles => write!(f, "subs_pgs/dvd"),
        }
    }
}

/// Remediation worklist for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Nothing to do
    None,
    /// Re-encode the audio track only
    AudioOnly,
    /// Re-encode video and audio
    FullFix,
}

impl Partition {
    /// Assign a partition from predicate results
    ///
    /// Full fix takes priority over audio-only. Image subtitles never select
    /// a partition on their own; they only escalate 10-bit HEVC.
    pub fn assign(hevc10: bool, audp: bool, img: bool) -> Self {
        if hevc10 && (img || audp) {
            Partition::FullFix
        } else if audp {
            Partition::AudioOnly
        } else {
            Partition::None
        }
    }
}

/// Predicate results and worklist decision for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub hevc10: bool,
    pub audio_problem: bool,
    pub image_subs: bool,
    /// Tags in fixed order: video, audio, subtitles
    pub tags: Vec<ReasonTag>,
    pub partition: Partition,
}

impl Classification {
    /// Classify a record
    pub fn of(record: &MediaRecord) -> Self {
        let hevc10 = is_hevc_10bit(&record.vcodec, &record.pix_fmt, &record.vprofile);
        let audp = audio_problem(&record.acodec);
        let img = has_image_subs(&record.subtitle_codecs);

        let mut tags = Vec::new();
        if hevc10 {
            tags.push(ReasonTag::Hevc10Bit);
        }
        if audp {
            tags.push(ReasonTag::Audio(normalize(&record.acodec)));
        }
        if img {
            tags.push(ReasonTag::ImageSubtitles);
        }

        Self {
            hevc10,
            audio_problem: audp,
            image_subs: img,
            tags,
            partition: Partition::assign(hevc10, audp, img),
        }
    }

    /// Pipe-joined reason tags, empty if nothing fired
    pub fn reason(&self) -> String {
        self.tags
            .iter()
            .map(|tag| tag.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Reason string for a record, derived from the record alone
pub fn reason(record: &MediaRecord) -> String {
    Classification::of(record).reason()
}

/// Records split into the two worklists, in input order
#[derive(Debug, Default)]
pub struct Triage<'a> {
    pub audio_only: Vec<&'a MediaRecord>,
    pub full_fix: Vec<&'a MediaRecord>,
    /// Records that need no work
    pub skipped: usize,
}

/// Split records into the audio-only and full-fix worklists
pub fn triage(records: &[MediaRecord]) -> Triage<'_> {
    let mut result = Triage::default();

    for record in records {
        let classification = Classification::of(record);
        match classification.partition {
            Partition::FullFix => result.full_fix.push(record),
            Partition::AudioOnly => result.audio_only.push(record),
            Partition::None => result.skipped += 1,
        }
        tracing::debug!(
            path = %record.path,
            partition = ?classification.partition,
            reason = %classification.reason(),
            "classified record"
        );
    }

    result
}
