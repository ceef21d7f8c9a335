use regex::Regex;
use std::sync::LazyLock;

use super::Matcher;
use crate::domain::models::EpisodeDescriptor;

// The name capture must stop at the last non-digit so a run like "101" reads
// as season 1 episode 01, never season 10 episode 1.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>(?:.*?\D|))(?P<s>\d{1,2})(?P<e>\d{2})(?:\D.*|)\.(?P<ext>.*?)$")
        .unwrap()
});

/// Bare concatenated digits right before the extension ("show101.mkv").
pub struct DigitsMatcher;

impl Matcher for DigitsMatcher {
    fn try_match(&self, file_name: &str) -> Option<EpisodeDescriptor> {
        PATTERN
            .captures(file_name)
            .and_then(|caps| super::descriptor_from(&caps, file_name))
    }
}
