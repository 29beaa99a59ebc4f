use std::sync::Arc;

use crate::{config::Config, error::AppResult, services::MovieSearch};

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<MovieSearch>,
}

impl AppState {
    /// Creates state around an already-built search service
    pub fn new(search: MovieSearch) -> Self {
        Self {
            search: Arc::new(search),
        }
    }

    /// Builds every provider client from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(MovieSearch::from_config(config)?))
    }
}
