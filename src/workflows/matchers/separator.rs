use regex::Regex;
use std::sync::LazyLock;

use super::Matcher;
use crate::domain::models::EpisodeDescriptor;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<name>.*?)(?P<s>\d+)x(?P<e>\d+).*\.(?P<ext>.*?)$").unwrap()
});

/// "1x05" separator form.
pub struct SeparatorMatcher;

impl Matcher for SeparatorMatcher {
    fn try_match(&self, file_name: &str) -> Option<EpisodeDescriptor> {
        PATTERN
            .captures(file_name)
            .and_then(|caps| super::descriptor_from(&caps, file_name))
    }
}
