use serde::{Deserialize, Serialize};

/// Sentinel used when a catalog has no poster for a movie
pub const NO_POSTER: &str = "N/A";

/// Which catalog produced a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "catalog", rename_all = "snake_case")]
pub enum MovieSource {
    /// Fully detailed record from the primary catalog (TMDb)
    Primary { tmdb_id: u64 },
    /// Record from the secondary catalog (OMDb), keyed by `external_id`.
    /// Search hits are partial until their details are fetched.
    Secondary,
}

/// Normalized movie returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub plot: String,
    /// Poster URL or [`NO_POSTER`]
    pub poster: String,
    /// IMDb id, empty when the catalog does not know it
    pub external_id: String,
    pub source: MovieSource,
    pub trailer: Option<String>,
}

impl MovieRecord {
    pub fn with_trailer(self, trailer: Option<String>) -> Self {
        Self { trailer, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serialization() {
        let primary = serde_json::to_value(MovieSource::Primary { tmdb_id: 603 }).unwrap();
        assert_eq!(primary, serde_json::json!({ "catalog": "primary", "tmdb_id": 603 }));

        let secondary = serde_json::to_value(MovieSource::Secondary).unwrap();
        assert_eq!(secondary, serde_json::json!({ "catalog": "secondary" }));
    }

    #[test]
    fn test_with_trailer_only_touches_trailer() {
        let record = MovieRecord {
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            plot: "A hacker learns the truth.".to_string(),
            poster: NO_POSTER.to_string(),
            external_id: "tt0133093".to_string(),
            source: MovieSource::Primary { tmdb_id: 603 },
            trailer: None,
        };
        let enriched = record
            .clone()
            .with_trailer(Some("https://www.youtube.com/watch?v=abc".to_string()));
        assert_eq!(enriched.title, record.title);
        assert_eq!(enriched.poster, record.poster);
        assert_eq!(enriched.source, record.source);
        assert_eq!(enriched.trailer.as_deref(), Some("https://www.youtube.com/watch?v=abc"));
    }
}
