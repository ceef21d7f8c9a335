use regex::Captures;
use thiserror::Error;

use crate::domain::models::EpisodeDescriptor;

pub mod digits;
pub mod marker;
pub mod separator;

use digits::DigitsMatcher;
use marker::MarkerMatcher;
use separator::SeparatorMatcher;

/// One filename pattern family. Matchers are tried in a fixed priority
/// order and the first to produce a descriptor wins.
pub trait Matcher {
    fn try_match(&self, file_name: &str) -> Option<EpisodeDescriptor>;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Filename not matched.")]
pub struct ParseError;

/// Pulls show name, season, episode and extension out of a filename.
pub fn parse_filename(file_name: &str) -> Result<EpisodeDescriptor, ParseError> {
    let matchers: [&dyn Matcher; 3] = [&MarkerMatcher, &SeparatorMatcher, &DigitsMatcher];
    matchers
        .iter()
        .find_map(|matcher| matcher.try_match(file_name))
        .ok_or(ParseError)
}

fn descriptor_from(caps: &Captures, file_name: &str) -> Option<EpisodeDescriptor> {
    let raw_name = caps
        .name("name")?
        .as_str()
        .replace(['.', '_'], " ")
        .trim()
        .to_string();
    Some(EpisodeDescriptor {
        raw_name,
        season: caps.name("s")?.as_str().parse().ok()?,
        episode: caps.name("e")?.as_str().parse().ok()?,
        file_name: file_name.to_string(),
        extension: caps.name("ext")?.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(file_name: &str) -> EpisodeDescriptor {
        parse_filename(file_name).expect(file_name)
    }

    #[test]
    fn test_marker_with_dot_separators() {
        let descriptor = parse("Show.Name.S02E05.mkv");
        assert_eq!(descriptor.raw_name, "Show Name");
        assert_eq!(descriptor.season, 2);
        assert_eq!(descriptor.episode, 5);
        assert_eq!(descriptor.extension, "mkv");
        assert_eq!(descriptor.file_name, "Show.Name.S02E05.mkv");
    }

    #[test]
    fn test_marker_with_spaced_numbers() {
        let descriptor = parse("Show Name s2 e5.avi");
        assert_eq!(descriptor.raw_name, "Show Name");
        assert_eq!(descriptor.season, 2);
        assert_eq!(descriptor.episode, 5);
        assert_eq!(descriptor.extension, "avi");
    }

    #[test]
    fn test_marker_with_year_between_name_and_marker() {
        let descriptor = parse("Doctor.Who.2005.S01E01.720p.m4v");
        assert_eq!(descriptor.raw_name, "Doctor Who");
        assert_eq!(descriptor.season, 1);
        assert_eq!(descriptor.episode, 1);
        assert_eq!(descriptor.extension, "m4v");
    }

    #[test]
    fn test_marker_with_underscore_separators() {
        let descriptor = parse("Show_Name_S01E09.mp4");
        assert_eq!(descriptor.raw_name, "Show Name");
        assert_eq!(descriptor.season, 1);
        assert_eq!(descriptor.episode, 9);
    }

    #[test]
    fn test_separator_form() {
        let descriptor = parse("show.name.2x05.hdtv.mkv");
        assert_eq!(descriptor.raw_name, "show name");
        assert_eq!(descriptor.season, 2);
        assert_eq!(descriptor.episode, 5);
        assert_eq!(descriptor.extension, "mkv");
    }

    #[test]
    fn test_bare_digits_short_run_favors_episode() {
        // 101 is season 1 episode 01, not season 10 episode 1
        let descriptor = parse("show101.mkv");
        assert_eq!(descriptor.raw_name, "show");
        assert_eq!(descriptor.season, 1);
        assert_eq!(descriptor.episode, 1);
    }

    #[test]
    fn test_bare_digits_four_digit_run() {
        let descriptor = parse("showname1204.mkv");
        assert_eq!(descriptor.raw_name, "showname");
        assert_eq!(descriptor.season, 12);
        assert_eq!(descriptor.episode, 4);
    }

    #[test]
    fn test_marker_takes_priority_over_digits() {
        let descriptor = parse("show.s01e02.x264.mkv");
        assert_eq!(descriptor.season, 1);
        assert_eq!(descriptor.episode, 2);
    }

    #[test]
    fn test_leading_zeros_dropped() {
        let descriptor = parse("Show.S002E005.mkv");
        assert_eq!(descriptor.season, 2);
        assert_eq!(descriptor.episode, 5);
    }

    #[test]
    fn test_unmatched_filename_fails() {
        assert_eq!(parse_filename("somefilm.mkv"), Err(ParseError));
        assert_eq!(parse_filename("notes"), Err(ParseError));
    }
}
