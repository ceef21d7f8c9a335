use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "episode-renamer")]
#[command(about = "Rename and sort TV episode files using information from TheTVDB")]
pub struct Cli {
    /// Instead of moving the files, just display what changes would be made
    #[arg(long)]
    pub dry_run: bool,

    /// Path to an alternate config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
