/// Structured fields pulled out of an episode filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeDescriptor {
    /// Show name fragment as captured, separators replaced with spaces.
    pub raw_name: String,
    pub season: u32,
    pub episode: u32,
    pub file_name: String,
    pub extension: String,
}

/// One show returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesCandidate {
    pub id: u32,
    /// Show title with any trailing "(YYYY)" removed.
    pub display_name: String,
    pub year: Option<u16>,
}

/// A chosen series plus the episode title looked up for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMatch {
    pub series: SeriesCandidate,
    pub episode_title: String,
}
