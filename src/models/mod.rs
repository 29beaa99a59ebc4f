use serde::Deserialize;

pub mod mood;
pub mod movie;
pub mod search;

pub use mood::{Mood, UnknownMood};
pub use movie::{MovieRecord, MovieSource, NO_POSTER};
pub use search::{
    MoodGenre, SearchMode, SearchRequest, SearchResponse, SearchResult, ServiceStatus,
};

// ============================================================================
// TMDb API Types
// ============================================================================

/// One page of `/discover/movie`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbDiscoverPage {
    #[serde(default)]
    pub results: Vec<TmdbMovieSummary>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

/// Discover result; only the id is needed to fetch details
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TmdbMovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Response of `/movie/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

impl TmdbMovieDetails {
    /// Normalizes details, building the poster URL from `image_base_url`
    pub fn into_record(self, image_base_url: &str) -> MovieRecord {
        let year = self
            .release_date
            .as_deref()
            .map(|date| date.chars().take(4).collect::<String>())
            .unwrap_or_default();

        let poster = match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", image_base_url, path),
            _ => NO_POSTER.to_string(),
        };

        MovieRecord {
            title: self.title.unwrap_or_default(),
            year,
            plot: self.overview.unwrap_or_default(),
            poster,
            external_id: self.imdb_id.unwrap_or_default(),
            source: MovieSource::Primary { tmdb_id: self.id },
            trailer: None,
        }
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Response of `?s=` searches; `Search` is absent when `Response` is "False"
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// Partial search hit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl From<OmdbSearchItem> for MovieRecord {
    fn from(item: OmdbSearchItem) -> Self {
        MovieRecord {
            title: item.title,
            year: item.year,
            plot: String::new(),
            poster: item.poster.unwrap_or_else(|| NO_POSTER.to_string()),
            external_id: item.imdb_id,
            source: MovieSource::Secondary,
            trailer: None,
        }
    }
}

/// Response of `?i=` lookups
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbMovieDetails {
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
}

impl OmdbMovieDetails {
    pub fn found(&self) -> bool {
        !matches!(self.response.as_deref(), Some("False"))
    }
}

impl From<OmdbMovieDetails> for MovieRecord {
    fn from(details: OmdbMovieDetails) -> Self {
        MovieRecord {
            title: details.title.unwrap_or_default(),
            year: details.year.unwrap_or_default(),
            plot: details.plot.unwrap_or_default(),
            poster: details.poster.unwrap_or_else(|| NO_POSTER.to_string()),
            external_id: details.imdb_id.unwrap_or_default(),
            source: MovieSource::Secondary,
            trailer: None,
        }
    }
}

// ============================================================================
// YouTube Data API Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeSearchResponse {
    #[serde(default)]
    pub items: Vec<YoutubeSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YoutubeSearchItem {
    pub id: YoutubeItemId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}
