/// TMDb (The Movie Database) provider
///
/// API Flow:
/// 1. Discover: /discover/movie?with_genres={id}&sort_by=popularity.desc → ids + total_pages
/// 2. Details: /movie/{id} → title, release date, overview, poster path, IMDb id
use crate::{
    config::Config,
    error::{AppResult, ClientError, ClientResult},
    models::{MovieRecord, TmdbDiscoverPage, TmdbMovieDetails, TmdbMovieSummary},
    services::providers::{build_http_client, get_json, PrimaryCatalog},
};
use reqwest::Client as HttpClient;

const PROVIDER: &str = "TMDb";
const SORT_BY_POPULARITY: &str = "popularity.desc";

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    image_base_url: String,
    max_pages: u32,
}

impl TmdbClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            http_client: build_http_client(config.request_timeout())?,
            api_key: config.tmdb_api_key.clone(),
            api_url: config.tmdb_api_url.trim_end_matches('/').to_string(),
            image_base_url: config.tmdb_image_url.clone(),
            max_pages: config.max_pages.max(1),
        })
    }

    fn api_key(&self) -> ClientResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(ClientError::MissingCredential(PROVIDER))
    }

    async fn discover(&self, genre_id: u32, page: u32) -> ClientResult<TmdbDiscoverPage> {
        let api_key = self.api_key()?;
        let url = format!("{}/discover/movie", self.api_url);
        let genre_id = genre_id.to_string();
        let page = page.to_string();

        get_json(
            &self.http_client,
            &url,
            &[
                ("api_key", api_key),
                ("with_genres", genre_id.as_str()),
                ("sort_by", SORT_BY_POPULARITY),
                ("page", page.as_str()),
            ],
        )
        .await
    }
}

#[async_trait::async_trait]
impl PrimaryCatalog for TmdbClient {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn find_by_genre(&self, genre_id: u32, page: u32) -> ClientResult<Vec<TmdbMovieSummary>> {
        let discovered = self.discover(genre_id, page).await?;

        tracing::info!(
            genre_id,
            page,
            results = discovered.results.len(),
            provider = "tmdb",
            "Genre discovery completed"
        );

        Ok(discovered.results)
    }

    async fn find_by_genre_page_count(&self, genre_id: u32, page: u32) -> ClientResult<u32> {
        let discovered = self.discover(genre_id, page).await?;
        Ok(discovered.total_pages.clamp(1, self.max_pages))
    }

    async fn fetch_details(&self, tmdb_id: u64) -> ClientResult<MovieRecord> {
        let api_key = self.api_key()?;
        let url = format!("{}/movie/{}", self.api_url, tmdb_id);

        let details: TmdbMovieDetails =
            get_json(&self.http_client, &url, &[("api_key", api_key)]).await?;

        tracing::debug!(tmdb_id, title = ?details.title, provider = "tmdb", "Details fetched");

        Ok(details.into_record(&self.image_base_url))
    }
}
