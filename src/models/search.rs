use serde::{Deserialize, Serialize};

use super::{Mood, MovieRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Title search against the secondary catalog
    Name,
    /// Free-text mood description
    Mood,
}

/// One user interaction, as received from the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchRequest {
    pub mode: SearchMode,
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl SearchRequest {
    pub fn by_name(query: impl Into<String>) -> Self {
        Self {
            mode: SearchMode::Name,
            query: query.into(),
            page: 1,
        }
    }

    pub fn by_mood(query: impl Into<String>, page: u32) -> Self {
        Self {
            mode: SearchMode::Mood,
            query: query.into(),
            page,
        }
    }
}

/// Outcome of a search, built once per request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub movies: Vec<MovieRecord>,
    pub total_pages: u32,
    /// Detected mood, for mood searches with a non-empty description
    pub mood: Option<Mood>,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self {
            movies: Vec::new(),
            total_pages: 1,
            mood: None,
        }
    }
}

/// Response body for the search endpoints
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub mode: SearchMode,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    pub movies: Vec<MovieRecord>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl SearchResponse {
    pub fn new(request: SearchRequest, result: SearchResult) -> Self {
        Self {
            mode: request.mode,
            query: request.query.trim().to_string(),
            mood: result.mood,
            movies: result.movies,
            current_page: request.page,
            total_pages: result.total_pages,
        }
    }
}

/// Which outbound services have credentials configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub tmdb: bool,
    pub omdb: bool,
    pub youtube: bool,
}

/// Catalog entry describing how a mood is searched
#[derive(Debug, Serialize)]
pub struct MoodGenre {
    pub mood: Mood,
    pub genre_id: u32,
    pub genre_keyword: &'static str,
}
