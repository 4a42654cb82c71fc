//! Record classification module
//!
//! This module decides what each inventory record needs:
//! - Codec predicates (10-bit HEVC video, problem audio, image subtitles)
//! - Reason tags describing which predicates fired
//! - Partition assignment into the audio-only and full-fix worklists

pub mod planner;
pub mod predicates;

pub use planner::{reason, triage, Classification, Partition, ReasonTag, Triage};
pub use predicates::{audio_problem, has_image_subs, is_hevc_10bit, normalize};
