use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extensions treated as video files, compared case-insensitively.
pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "flv", "avi", "mkv", "m4v"];

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("{} already exists.", .0.display())]
    AlreadyExists(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn is_video_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Plain video files in `directory`, case-insensitive lexicographic order.
pub fn list_video_files(directory: &Path) -> io::Result<Vec<String>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Ok(file_name) = entry.file_name().into_string() {
            if is_video_file(&file_name) {
                found.push(file_name);
            }
        }
    }
    found.sort_by_key(|name| name.to_lowercase());
    Ok(found)
}

/// Moves `source_name` into `dest_dir`, creating show/season folders as
/// needed. Never overwrites: an existing destination fails the move and
/// leaves the source where it was.
pub fn move_file(
    source_dir: &Path,
    source_name: &str,
    dest_dir: &Path,
    dest_name: &str,
) -> Result<PathBuf, MoveError> {
    fs::create_dir_all(dest_dir)?;

    let dest_path = dest_dir.join(dest_name);
    if dest_path.exists() {
        return Err(MoveError::AlreadyExists(dest_path));
    }

    let source_path = source_dir.join(source_name);
    if fs::rename(&source_path, &dest_path).is_err() {
        // Rename fails across filesystems; copy, then drop the source only
        // once the copy is complete.
        if let Err(e) = fs::copy(&source_path, &dest_path) {
            let _ = fs::remove_file(&dest_path);
            return Err(e.into());
        }
        fs::remove_file(&source_path)?;
    }
    Ok(dest_path)
}
