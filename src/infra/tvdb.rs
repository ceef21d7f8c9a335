use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::domain::models::SeriesCandidate;

const TVDB_API_BASE: &str = "https://api.thetvdb.com";

/// Show and episode lookup contract the resolver consumes. "No match" is
/// an empty list or `None`, never an error; errors mean the catalog itself
/// is unreachable or rejecting us, which no later query will survive.
pub trait Catalog {
    fn search_series(&mut self, name: &str) -> Result<Vec<SeriesCandidate>, CatalogError>;
    fn lookup_episode(
        &mut self,
        series_id: u32,
        season: u32,
        episode: u32,
    ) -> Result<Option<String>, CatalogError>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TVDB currently down. Please try again later.")]
    Unavailable,
    #[error("TVDB error: {0}")]
    Api(String),
    #[error("TVDB request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed TVDB response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvdbCredentials {
    pub api_key: String,
    pub user_key: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    data: LoginData,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<SearchRecord>,
}

#[derive(Debug, Deserialize)]
struct SearchRecord {
    id: u32,
    #[serde(rename = "seriesName")]
    series_name: String,
    #[serde(rename = "firstAired")]
    first_aired: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EpisodeQueryResponse {
    data: Vec<EpisodeRecord>,
}

#[derive(Debug, Deserialize)]
struct EpisodeRecord {
    #[serde(rename = "airedSeason")]
    aired_season: u32,
    #[serde(rename = "airedEpisodeNumber")]
    aired_episode_number: u32,
    #[serde(rename = "episodeName")]
    episode_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug)]
pub struct TvdbClient {
    credentials: TvdbCredentials,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl TvdbClient {
    pub fn new(credentials: TvdbCredentials) -> Self {
        Self {
            credentials,
            token: None,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Exchanges the configured credentials for a bearer token. TVDB
    /// requires this before any other request.
    pub fn login(&mut self) -> Result<(), CatalogError> {
        let body = serde_json::json!({
            "apikey": self.credentials.api_key,
            "userkey": self.credentials.user_key,
            "username": self.credentials.username,
        });
        let response = self
            .http
            .post(format!("{TVDB_API_BASE}/login"))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body.to_string())
            .send()?;
        let status = response.status();
        let text = response.text()?;
        check_status(status, &text)?;

        let login: LoginResponse = serde_json::from_str(&text)?;
        self.token = Some(login.data.token);
        Ok(())
    }

    fn ensure_authenticated(&mut self) -> Result<String, CatalogError> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }
        self.login()?;
        Ok(self.token.clone().unwrap_or_default())
    }
}

impl Catalog for TvdbClient {
    fn search_series(&mut self, name: &str) -> Result<Vec<SeriesCandidate>, CatalogError> {
        let token = self.ensure_authenticated()?;
        let response = self
            .http
            .get(format!("{TVDB_API_BASE}/search/series"))
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/json")
            .query(&[("name", name)])
            .send()?;
        let status = response.status();
        let text = response.text()?;
        if status == reqwest::StatusCode::NOT_FOUND {
            // TVDB reports "no search results" as a 404
            return Ok(Vec::new());
        }
        check_status(status, &text)?;

        let search: SearchResponse = serde_json::from_str(&text)?;
        Ok(search.data.into_iter().map(SeriesCandidate::from).collect())
    }

    fn lookup_episode(
        &mut self,
        series_id: u32,
        season: u32,
        episode: u32,
    ) -> Result<Option<String>, CatalogError> {
        let token = self.ensure_authenticated()?;
        let response = self
            .http
            .get(format!("{TVDB_API_BASE}/series/{series_id}/episodes/query"))
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/json")
            .query(&[
                ("airedSeason", season.to_string()),
                ("airedEpisode", episode.to_string()),
            ])
            .send()?;
        let status = response.status();
        let text = response.text()?;
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(status, &text)?;

        let query: EpisodeQueryResponse = serde_json::from_str(&text)?;
        Ok(query
            .data
            .into_iter()
            .find(|record| record.aired_season == season && record.aired_episode_number == episode)
            .and_then(|record| record.episode_name))
    }
}

fn check_status(status: reqwest::StatusCode, body: &str) -> Result<(), CatalogError> {
    if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
        return Err(CatalogError::Unavailable);
    }
    if let Ok(err) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = err.error {
            return Err(CatalogError::Api(message));
        }
    }
    if !status.is_success() {
        return Err(CatalogError::Api(format!("HTTP {status}")));
    }
    Ok(())
}

impl From<SearchRecord> for SeriesCandidate {
    fn from(record: SearchRecord) -> Self {
        SeriesCandidate {
            id: record.id,
            display_name: strip_year(&record.series_name),
            year: record.first_aired.as_deref().and_then(extract_year),
        }
    }
}

static YEAR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([0-9]{4}\)").unwrap());

/// Removes a "(YYYY)" qualifier from a show title.
fn strip_year(name: &str) -> String {
    YEAR_SUFFIX.replace_all(name, "").trim().to_string()
}

/// Year component of an ISO "YYYY-MM-DD" date.
fn extract_year(date: &str) -> Option<u16> {
    date.split('-').next()?.parse().ok()
}
