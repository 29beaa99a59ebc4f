/// OMDb (Open Movie Database) provider
///
/// Only keyword search is offered, so it serves title searches and acts as the
/// fallback for mood searches. OMDb answers misses with HTTP 200 and
/// `{"Response": "False", "Error": "..."}`.
use crate::{
    config::Config,
    error::{AppResult, ClientError, ClientResult},
    models::{MovieRecord, OmdbMovieDetails, OmdbSearchResponse},
    services::providers::{build_http_client, get_json, SecondaryCatalog},
};
use reqwest::Client as HttpClient;

const PROVIDER: &str = "OMDb";

#[derive(Clone)]
pub struct OmdbClient {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl OmdbClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            http_client: build_http_client(config.request_timeout())?,
            api_key: config.omdb_api_key.clone(),
            api_url: config.omdb_api_url.clone(),
        })
    }

    fn api_key(&self) -> ClientResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(ClientError::MissingCredential(PROVIDER))
    }

    async fn search(&self, term: &str) -> ClientResult<Vec<MovieRecord>> {
        let api_key = self.api_key()?;

        let response: OmdbSearchResponse =
            get_json(&self.http_client, &self.api_url, &[("apikey", api_key), ("s", term)]).await?;

        if let Some(error) = &response.error {
            tracing::debug!(term = %term, error = %error, provider = "omdb", "Search returned no results");
        }

        let movies: Vec<MovieRecord> = response.search.into_iter().map(MovieRecord::from).collect();

        tracing::info!(
            term = %term,
            results = movies.len(),
            provider = "omdb",
            "Search completed"
        );

        Ok(movies)
    }
}

#[async_trait::async_trait]
impl SecondaryCatalog for OmdbClient {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn find_by_title(&self, name: &str) -> ClientResult<Vec<MovieRecord>> {
        self.search(name).await
    }

    async fn find_by_genre_keyword(&self, keyword: &str) -> ClientResult<Vec<MovieRecord>> {
        self.search(keyword).await
    }

    async fn fetch_details(&self, imdb_id: &str) -> ClientResult<MovieRecord> {
        let api_key = self.api_key()?;

        let details: OmdbMovieDetails = get_json(
            &self.http_client,
            &self.api_url,
            &[("apikey", api_key), ("i", imdb_id), ("plot", "short")],
        )
        .await?;

        if !details.found() {
            let reason = details.error.unwrap_or_else(|| imdb_id.to_string());
            return Err(ClientError::NotFound(reason));
        }

        Ok(MovieRecord::from(details))
    }
}
