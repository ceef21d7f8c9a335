use std::path::{Path, PathBuf};

use crate::domain::models::{EpisodeDescriptor, SeriesCandidate};

/// Builds the "SxxEyy - Title.ext" filename for a resolved episode.
/// Season and episode are zero-padded to two digits; wider values print
/// as-is.
pub fn generate_filename(descriptor: &EpisodeDescriptor, episode_title: &str) -> String {
    winsafe_filename(&format!(
        "S{:02}E{:02} - {}.{}",
        descriptor.season, descriptor.episode, episode_title, descriptor.extension
    ))
}

/// Strips characters that are illegal in filenames on common filesystems.
pub fn winsafe_filename(file_name: &str) -> String {
    file_name
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | ':' | '"' | '*' | '?' | '<' | '>' | '|'))
        .collect()
}

/// Show and season folder the episode sorts into. The season folder keeps
/// the unpadded season number; the show folder carries the release year
/// when the catalog knows it.
pub fn target_directory(dest_root: &Path, series: &SeriesCandidate, season: u32) -> PathBuf {
    let show_folder = match series.year {
        Some(year) => format!("{} ({})", series.display_name, year),
        None => series.display_name.clone(),
    };
    dest_root.join(show_folder).join(format!("Season {season}"))
}
