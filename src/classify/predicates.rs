//! Codec predicates
//!
//! All predicates trim and lowercase their input first, so an absent or
//! empty field simply never matches.

/// Video codec names treated as HEVC
const HEVC_CODECS: [&str; 2] = ["hevc", "h265"];

/// Audio codecs that need converting for broad playback support
const PROBLEM_AUDIO_CODECS: [&str; 3] = ["dts", "dca", "truehd"];

/// Image-based subtitle codecs
const IMAGE_SUBTITLE_CODECS: [&str; 2] = ["hdmv_pgs_subtitle", "dvd_subtitle"];

/// Trim surrounding whitespace and lowercase
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Check if the video stream is 10-bit HEVC
///
/// The codec must be HEVC/H.265 (exact match). Bit depth is detected from
/// the pixel format (`p010`, `yuv420p10*`) or the profile name (`Main 10`).
pub fn is_hevc_10bit(vcodec: &str, pix_fmt: &str, vprofile: &str) -> bool {
    let vcodec = normalize(vcodec);
    if !HEVC_CODECS.contains(&vcodec.as_str()) {
        return false;
    }

    let pix_fmt = normalize(pix_fmt);
    let vprofile = normalize(vprofile);
    pix_fmt.contains("p010") || pix_fmt.contains("yuv420p10") || vprofile.contains("main 10")
}

/// Check if the audio codec needs re-encoding (DTS, DCA, TrueHD)
pub fn audio_problem(acodec: &str) -> bool {
    PROBLEM_AUDIO_CODECS.contains(&normalize(acodec).as_str())
}

/// Check if any subtitle track is image-based (PGS or DVD)
pub fn has_image_subs(subtitle_codecs: &str) -> bool {
    let subtitle_codecs = normalize(subtitle_codecs);
    IMAGE_SUBTITLE_CODECS
        .iter()
        .any(|codec| subtitle_codecs.contains(codec))
}
