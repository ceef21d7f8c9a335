use regex::Regex;
use std::sync::LazyLock;

use super::Matcher;
use crate::domain::models::EpisodeDescriptor;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>.*?)\.*?(\d{4})?\.*?s *(?P<s>\d+) *e *(?P<e>\d+).*\.(?P<ext>.*?)$")
        .unwrap()
});

/// Explicit "SxxEyy" marker form, tolerant of spacing around the season and
/// episode numbers and of a 4-digit release year between name and marker.
pub struct MarkerMatcher;

impl Matcher for MarkerMatcher {
    fn try_match(&self, file_name: &str) -> Option<EpisodeDescriptor> {
        PATTERN
            .captures(file_name)
            .and_then(|caps| super::descriptor_from(&caps, file_name))
    }
}
