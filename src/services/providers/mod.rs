/// Outbound movie data providers
///
/// Three third-party services feed a search: a primary catalog with genre discovery
/// and pagination (TMDb), a secondary keyword catalog used as fallback (OMDb) and a
/// trailer lookup (YouTube). Each is behind a trait so the search service can be
/// exercised without network access.
///
/// Every call returns a [`ClientResult`]. Clients never swallow failures; the
/// search service logs them and treats every error kind as "no data".
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    error::{AppResult, ClientError, ClientResult},
    models::{MovieRecord, TmdbMovieSummary},
};

pub mod omdb;
pub mod tmdb;
pub mod youtube;

pub use omdb::OmdbClient;
pub use tmdb::TmdbClient;
pub use youtube::YoutubeClient;

/// Primary catalog: genre discovery with pagination and full details
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PrimaryCatalog: Send + Sync {
    /// True when a credential is configured. Checked before any request.
    fn is_available(&self) -> bool;

    /// Movies of a genre sorted by descending popularity
    async fn find_by_genre(&self, genre_id: u32, page: u32) -> ClientResult<Vec<TmdbMovieSummary>>;

    /// Upstream page count for a genre, capped at the configured maximum
    async fn find_by_genre_page_count(&self, genre_id: u32, page: u32) -> ClientResult<u32>;

    /// Full, normalized record
    async fn fetch_details(&self, tmdb_id: u64) -> ClientResult<MovieRecord>;
}

/// Secondary catalog: keyword search only
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SecondaryCatalog: Send + Sync {
    fn is_available(&self) -> bool;

    /// Partial records matching a title
    async fn find_by_title(&self, name: &str) -> ClientResult<Vec<MovieRecord>>;

    /// Partial records matching a genre keyword
    async fn find_by_genre_keyword(&self, keyword: &str) -> ClientResult<Vec<MovieRecord>>;

    /// Full record for an IMDb id
    async fn fetch_details(&self, imdb_id: &str) -> ClientResult<MovieRecord>;
}

/// Trailer lookup by movie title
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TrailerLookup: Send + Sync {
    fn is_available(&self) -> bool;

    /// Watch URL of the best matching trailer, `None` when nothing matched
    async fn find_trailer(&self, title: &str) -> ClientResult<Option<String>>;
}

/// Builds the HTTP client shared by every request of one provider
pub(crate) fn build_http_client(timeout: Duration) -> AppResult<HttpClient> {
    Ok(HttpClient::builder().timeout(timeout).build()?)
}

/// Sends a GET and decodes a JSON body, classifying each failure
pub(crate) async fn get_json<T: DeserializeOwned>(
    http_client: &HttpClient,
    url: &str,
    query: &[(&str, &str)],
) -> ClientResult<T> {
    let response = http_client.get(url).query(query).send().await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::debug!(error = %e, url = %url, "Failed to decode provider response");
        ClientError::Decode(e)
    })
}
