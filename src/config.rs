use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDb API key (primary catalog)
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// OMDb API key (secondary catalog)
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    /// YouTube Data API key (trailer lookup)
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    /// Verbose logging; only a case-insensitive `true` enables it
    #[serde(default = "default_debug", deserialize_with = "deserialize_flag")]
    pub debug: bool,

    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Timeout for every outbound request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Movies returned per mood-search page
    #[serde(default = "default_max_movies_per_page")]
    pub max_movies_per_page: usize,

    /// Upper bound for the page count reported by the primary catalog
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_debug() -> bool {
    true
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}

fn default_request_timeout() -> u64 {
    5
}

fn default_max_movies_per_page() -> usize {
    5
}

fn default_max_pages() -> u32 {
    10
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            omdb_api_key: None,
            youtube_api_key: None,
            debug: default_debug(),
            secret_key: default_secret_key(),
            request_timeout: default_request_timeout(),
            max_movies_per_page: default_max_movies_per_page(),
            max_pages: default_max_pages(),
            tmdb_api_url: default_tmdb_api_url(),
            tmdb_image_url: default_tmdb_image_url(),
            omdb_api_url: default_omdb_api_url(),
            youtube_api_url: default_youtube_api_url(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from arbitrary key/value pairs (same keys as the environment)
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        Ok(config.normalized())
    }

    /// Blank keys and `.env` template placeholders count as missing.
    fn normalized(mut self) -> Self {
        for key in [
            &mut self.tmdb_api_key,
            &mut self.omdb_api_key,
            &mut self.youtube_api_key,
        ] {
            *key = key.take().and_then(|value| {
                let value = value.trim().to_string();
                let placeholder = value.starts_with("your_") && value.ends_with("_api_key");
                (!value.is_empty() && !placeholder).then_some(value)
            });
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Names of the credentials that are not configured
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("TMDB_API_KEY", &self.tmdb_api_key),
            ("OMDB_API_KEY", &self.omdb_api_key),
            ("YOUTUBE_API_KEY", &self.youtube_api_key),
        ]
        .into_iter()
        .filter(|(_, key)| key.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
