use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})(?:[^0-9A-Za-z_-]|$)")
        .expect("VIDEO_ID is a valid regex pattern")
});

/// Pulls the 11-character video identifier out of a watch, short or embed URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
