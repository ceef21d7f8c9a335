use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::tvdb::TvdbCredentials;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory scanned for loosely-named episode files.
    pub source_dir: PathBuf,
    /// Root the sorted Show/Season folders are created under.
    pub dest_dir: PathBuf,
    pub tvdb: TvdbCredentials,
}

pub fn load(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    if !config_path.exists() {
        bail!(
            "Config file not found. Create {} with source_dir, dest_dir and a [tvdb] section (api_key, user_key, username).",
            config_path.display()
        );
    }
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    // Environment variable wins over the file
    if let Ok(key) = env::var("TVDB_API_KEY") {
        config.tvdb.api_key = key;
    }

    Ok(config)
}

fn get_config_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("episode-renamer"))
        // If the standard path could not be found (e.g. `$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
        .join("config.toml")
}
