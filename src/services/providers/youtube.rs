/// YouTube Data API provider for trailer links
use crate::{
    config::Config,
    error::{AppResult, ClientError, ClientResult},
    models::YoutubeSearchResponse,
    services::providers::{build_http_client, get_json, TrailerLookup},
};
use reqwest::Client as HttpClient;

const PROVIDER: &str = "YouTube";
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Clone)]
pub struct YoutubeClient {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl YoutubeClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            http_client: build_http_client(config.request_timeout())?,
            api_key: config.youtube_api_key.clone(),
            api_url: config.youtube_api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl TrailerLookup for YoutubeClient {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn find_trailer(&self, title: &str) -> ClientResult<Option<String>> {
        if title.trim().is_empty() {
            return Ok(None);
        }
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClientError::MissingCredential(PROVIDER))?;

        let url = format!("{}/search", self.api_url);
        let query = format!("{} trailer", title);

        let response: YoutubeSearchResponse = get_json(
            &self.http_client,
            &url,
            &[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("key", api_key),
                ("type", "video"),
                ("maxResults", "1"),
            ],
        )
        .await?;

        let trailer = response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id.video_id)
            .map(|video_id| format!("{}{}", WATCH_URL, video_id));

        tracing::debug!(title = %title, found = trailer.is_some(), provider = "youtube", "Trailer lookup completed");

        Ok(trailer)
    }
}
