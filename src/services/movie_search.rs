use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, AppResult, ClientResult},
    models::{
        Mood, MoodGenre, MovieRecord, MovieSource, SearchMode, SearchRequest, SearchResult,
        ServiceStatus,
    },
    services::{
        genre::GenreMapper,
        mood::MoodClassifier,
        providers::{
            OmdbClient, PrimaryCatalog, SecondaryCatalog, TmdbClient, TrailerLookup, YoutubeClient,
        },
    },
};

const EMPTY_NAME: &str = "Please enter a movie name.";
const EMPTY_DESCRIPTION: &str = "Please describe your mood.";
const INVALID_PAGE: &str = "Page must be 1 or greater.";
const MISSING_OMDB: &str = "OMDB_API_KEY is missing. Please configure your .env.";
const MISSING_CATALOGS: &str = "TMDB_API_KEY or OMDB_API_KEY is missing. Please configure your .env.";

/// Movie search across the primary catalog, the secondary catalog and trailer lookup.
///
/// Holds no mutable state; one instance serves every request. Outbound calls of
/// a single search are awaited one after another.
pub struct MovieSearch {
    primary: Arc<dyn PrimaryCatalog>,
    secondary: Arc<dyn SecondaryCatalog>,
    trailers: Arc<dyn TrailerLookup>,
    classifier: MoodClassifier,
    mapper: GenreMapper,
    max_movies_per_page: usize,
}

impl MovieSearch {
    pub fn new(
        primary: Arc<dyn PrimaryCatalog>,
        secondary: Arc<dyn SecondaryCatalog>,
        trailers: Arc<dyn TrailerLookup>,
        classifier: MoodClassifier,
        max_movies_per_page: usize,
    ) -> Self {
        Self {
            primary,
            secondary,
            trailers,
            classifier,
            mapper: GenreMapper,
            max_movies_per_page,
        }
    }

    /// Builds the TMDb, OMDb and YouTube clients from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            Arc::new(TmdbClient::new(config)?),
            Arc::new(OmdbClient::new(config)?),
            Arc::new(YoutubeClient::new(config)?),
            MoodClassifier::with_lexicon()?,
            config.max_movies_per_page,
        ))
    }

    pub fn service_status(&self) -> ServiceStatus {
        ServiceStatus {
            tmdb: self.primary.is_available(),
            omdb: self.secondary.is_available(),
            youtube: self.trailers.is_available(),
        }
    }

    pub fn mood_catalog(&self) -> Vec<MoodGenre> {
        self.mapper.catalog()
    }

    /// Validates a request, checks the needed credentials, then runs the search.
    ///
    /// Validation and credential failures are reported before any network call.
    pub async fn handle(&self, request: &SearchRequest) -> AppResult<SearchResult> {
        if request.page == 0 {
            return Err(AppError::InvalidInput(INVALID_PAGE.to_string()));
        }

        let query = request.query.trim();
        match request.mode {
            SearchMode::Name => {
                if query.is_empty() {
                    return Err(AppError::InvalidInput(EMPTY_NAME.to_string()));
                }
                if !self.secondary.is_available() {
                    return Err(AppError::ServiceUnavailable(MISSING_OMDB.to_string()));
                }
                Ok(SearchResult {
                    movies: self.search_by_name(query).await,
                    total_pages: 1,
                    mood: None,
                })
            }
            SearchMode::Mood => {
                if query.is_empty() {
                    return Err(AppError::InvalidInput(EMPTY_DESCRIPTION.to_string()));
                }
                if !self.primary.is_available() && !self.secondary.is_available() {
                    return Err(AppError::ServiceUnavailable(MISSING_CATALOGS.to_string()));
                }
                Ok(self.search_by_mood(query, request.page).await)
            }
        }
    }

    /// Title search against the secondary catalog, enriched with trailers
    pub async fn search_by_name(&self, name: &str) -> Vec<MovieRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }

        let mut hits = or_empty(self.secondary.find_by_title(name).await, "omdb", "find_by_title");
        hits.truncate(self.max_movies_per_page);
        self.enrich_with_trailers(hits).await
    }

    /// Mood search: primary catalog first, secondary catalog only when the
    /// primary is ineligible or produced nothing. Results are never merged.
    pub async fn search_by_mood(&self, description: &str, page: u32) -> SearchResult {
        let description = description.trim();
        if description.is_empty() {
            return SearchResult::empty();
        }

        let mood = self.classifier.detect_mood(description);
        tracing::debug!(input = %description, mood = %mood, "Detected mood");

        let mut movies = Vec::new();
        let mut total_pages = 1;

        if self.primary.is_available() && self.mapper.is_known(mood) {
            (movies, total_pages) = self.search_primary(mood, page).await;
        }

        if movies.is_empty() {
            total_pages = 1;
            if self.secondary.is_available() {
                let keyword = self.mapper.secondary_genre_keyword(mood);
                tracing::debug!(mood = %mood, keyword, "Falling back to secondary catalog");

                let mut hits = or_empty(
                    self.secondary.find_by_genre_keyword(keyword).await,
                    "omdb",
                    "find_by_genre_keyword",
                );
                hits.truncate(self.max_movies_per_page);
                movies = self.enrich_with_trailers(hits).await;
            }
        }

        SearchResult {
            movies,
            total_pages,
            mood: Some(mood),
        }
    }

    async fn search_primary(&self, mood: Mood, page: u32) -> (Vec<MovieRecord>, u32) {
        let genre_id = self.mapper.primary_genre_id(mood);
        tracing::debug!(mood = %mood, genre_id, page, "Using primary catalog genre");

        let summaries = or_empty(
            self.primary.find_by_genre(genre_id, page).await,
            "tmdb",
            "find_by_genre",
        );
        if summaries.is_empty() {
            return (Vec::new(), 1);
        }

        let mut movies = Vec::new();
        for summary in summaries.iter().take(self.max_movies_per_page) {
            match self.primary.fetch_details(summary.id).await {
                Ok(record) => movies.push(record),
                Err(e) => {
                    tracing::warn!(tmdb_id = summary.id, error = %e, "Dropping movie without details");
                }
            }
        }
        if movies.is_empty() {
            return (movies, 1);
        }

        let movies = self.enrich_with_trailers(movies).await;
        let total_pages = self
            .primary
            .find_by_genre_page_count(genre_id, page)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(genre_id, error = %e, provider = "tmdb", "Page count unavailable");
                1
            });

        (movies, total_pages)
    }

    /// Attaches a trailer to every movie.
    ///
    /// Secondary-catalog records are search hits, so their details are fetched
    /// first and a record whose details cannot be fetched is dropped. A missing
    /// trailer never drops a record. Order is preserved.
    pub async fn enrich_with_trailers(&self, movies: Vec<MovieRecord>) -> Vec<MovieRecord> {
        if movies.is_empty() || !self.trailers.is_available() {
            return movies;
        }

        let mut enriched = Vec::with_capacity(movies.len());
        for movie in movies {
            let detailed = match movie.source {
                MovieSource::Primary { .. } => movie,
                MovieSource::Secondary => {
                    match self.secondary.fetch_details(&movie.external_id).await {
                        Ok(details) => details,
                        Err(e) => {
                            tracing::warn!(
                                imdb_id = %movie.external_id,
                                error = %e,
                                provider = "omdb",
                                "Dropping movie without details"
                            );
                            continue;
                        }
                    }
                }
            };

            let trailer = self.trailer_for(&detailed.title).await;
            enriched.push(detailed.with_trailer(trailer));
        }

        enriched
    }

    async fn trailer_for(&self, title: &str) -> Option<String> {
        self.trailers
            .find_trailer(title)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(title = %title, error = %e, provider = "youtube", "Trailer lookup failed");
                None
            })
    }
}

/// Every client error means "no data" for the current request
fn or_empty<T: Default>(result: ClientResult<T>, provider: &str, operation: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(provider, operation, error = %e, "Provider call failed");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ClientError,
        models::{TmdbMovieSummary, NO_POSTER},
        services::providers::{MockPrimaryCatalog, MockSecondaryCatalog, MockTrailerLookup},
    };

    fn primary_record(tmdb_id: u64) -> MovieRecord {
        MovieRecord {
            title: format!("Movie {}", tmdb_id),
            year: "2001".to_string(),
            plot: format!("Plot {}", tmdb_id),
            poster: format!("https://image.tmdb.org/t/p/w500/{}.jpg", tmdb_id),
            external_id: format!("tt{:07}", tmdb_id),
            source: MovieSource::Primary { tmdb_id },
            trailer: None,
        }
    }

    fn secondary_hit(imdb_id: &str) -> MovieRecord {
        MovieRecord {
            title: format!("Hit {}", imdb_id),
            year: "1999".to_string(),
            plot: String::new(),
            poster: NO_POSTER.to_string(),
            external_id: imdb_id.to_string(),
            source: MovieSource::Secondary,
            trailer: None,
        }
    }

    fn secondary_details(imdb_id: &str) -> MovieRecord {
        MovieRecord {
            title: format!("Detailed {}", imdb_id),
            plot: "Full plot".to_string(),
            ..secondary_hit(imdb_id)
        }
    }

    fn summaries(count: u64) -> Vec<TmdbMovieSummary> {
        (1..=count)
            .map(|id| TmdbMovieSummary { id, title: None })
            .collect()
    }

    fn primary(available: bool) -> MockPrimaryCatalog {
        let mut mock = MockPrimaryCatalog::new();
        mock.expect_is_available().return_const(available);
        mock
    }

    fn secondary(available: bool) -> MockSecondaryCatalog {
        let mut mock = MockSecondaryCatalog::new();
        mock.expect_is_available().return_const(available);
        mock
    }

    fn trailers(available: bool) -> MockTrailerLookup {
        let mut mock = MockTrailerLookup::new();
        mock.expect_is_available().return_const(available);
        mock
    }

    fn trailer_url(title: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", title.replace(' ', "_"))
    }

    fn search_with(
        primary: MockPrimaryCatalog,
        secondary: MockSecondaryCatalog,
        trailers: MockTrailerLookup,
        classifier: MoodClassifier,
    ) -> MovieSearch {
        MovieSearch::new(
            Arc::new(primary),
            Arc::new(secondary),
            Arc::new(trailers),
            classifier,
            5,
        )
    }

    fn search(
        primary: MockPrimaryCatalog,
        secondary: MockSecondaryCatalog,
        trailers: MockTrailerLookup,
    ) -> MovieSearch {
        search_with(primary, secondary, trailers, MoodClassifier::with_lexicon().unwrap())
    }

    #[tokio::test]
    async fn test_empty_description_makes_no_calls() {
        // Mocks without expectations panic when called.
        let search = search(
            MockPrimaryCatalog::new(),
            MockSecondaryCatalog::new(),
            MockTrailerLookup::new(),
        );
        for page in [1, 3, 10] {
            assert_eq!(search.search_by_mood("", page).await, SearchResult::empty());
            assert_eq!(search.search_by_mood("   ", page).await, SearchResult::empty());
        }
    }

    #[tokio::test]
    async fn test_primary_unavailable_uses_secondary_only() {
        let mut secondary = secondary(true);
        secondary
            .expect_find_by_genre_keyword()
            .times(1)
            .returning(|keyword| {
                assert_eq!(keyword, "comedy");
                Ok(vec![secondary_hit("tt0000001"), secondary_hit("tt0000002")])
            });
        secondary
            .expect_fetch_details()
            .times(2)
            .returning(|imdb_id| Ok(secondary_details(imdb_id)));

        let mut trailers = trailers(true);
        trailers
            .expect_find_trailer()
            .returning(|title| Ok(Some(trailer_url(title))));

        let search = search(primary(false), secondary, trailers);
        let result = search.search_by_mood("I feel so happy today", 1).await;

        assert_eq!(result.mood, Some(Mood::Happy));
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.movies.len(), 2);
        assert!(result.movies.iter().all(|m| m.source == MovieSource::Secondary));
        assert_eq!(result.movies[0].title, "Detailed tt0000001");
        assert_eq!(
            result.movies[0].trailer.as_deref(),
            Some("https://www.youtube.com/watch?v=Detailed_tt0000001")
        );
    }

    #[tokio::test]
    async fn test_primary_results_are_capped_and_paginated() {
        let mut primary = primary(true);
        primary
            .expect_find_by_genre()
            .times(1)
            .returning(|genre_id, page| {
                assert_eq!(genre_id, 28);
                assert_eq!(page, 3);
                Ok(summaries(8))
            });
        primary
            .expect_fetch_details()
            .times(5)
            .returning(|id| Ok(primary_record(id)));
        primary
            .expect_find_by_genre_page_count()
            .times(1)
            .returning(|_, _| Ok(10));

        // Secondary must not be queried.
        let search = search(primary, MockSecondaryCatalog::new(), trailers(false));
        let result = search.search_by_mood("I'm pumped for tonight", 3).await;

        assert_eq!(result.mood, Some(Mood::Excited));
        assert_eq!(result.movies.len(), 5);
        assert_eq!(result.total_pages, 10);
        let ids: Vec<_> = result.movies.iter().map(|m| m.source.clone()).collect();
        assert_eq!(ids[0], MovieSource::Primary { tmdb_id: 1 });
        assert_eq!(ids[4], MovieSource::Primary { tmdb_id: 5 });
    }

    #[tokio::test]
    async fn test_primary_detail_failures_are_dropped() {
        let mut primary = primary(true);
        primary.expect_find_by_genre().returning(|_, _| Ok(summaries(3)));
        primary.expect_fetch_details().returning(|id| {
            if id == 2 {
                Err(ClientError::NotFound("2".to_string()))
            } else {
                Ok(primary_record(id))
            }
        });
        primary
            .expect_find_by_genre_page_count()
            .returning(|_, _| Ok(4));

        let search = search(primary, MockSecondaryCatalog::new(), trailers(false));
        let result = search.search_by_mood("a mystery please", 1).await;

        let titles: Vec<_> = result.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Movie 1", "Movie 3"]);
        assert_eq!(result.total_pages, 4);
    }

    #[tokio::test]
    async fn test_primary_without_any_details_falls_back() {
        let mut primary = primary(true);
        primary.expect_find_by_genre().times(1).returning(|_, _| Ok(summaries(4)));
        primary
            .expect_fetch_details()
            .times(4)
            .returning(|_| Err(ClientError::Timeout));
        primary.expect_find_by_genre_page_count().never();

        let mut secondary = secondary(true);
        secondary
            .expect_find_by_genre_keyword()
            .times(1)
            .returning(|keyword| {
                assert_eq!(keyword, "adventure");
                Ok(vec![secondary_hit("tt0000011")])
            });

        let search = search(primary, secondary, trailers(false));
        let result = search.search_by_mood("ready for a journey", 3).await;

        assert_eq!(result.mood, Some(Mood::Adventurous));
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.movies, vec![secondary_hit("tt0000011")]);
    }

    #[tokio::test]
    async fn test_secondary_fallback_is_capped() {
        let mut secondary = secondary(true);
        secondary.expect_find_by_genre_keyword().returning(|_| {
            Ok((1..=10)
                .map(|n| secondary_hit(&format!("tt{:07}", n)))
                .collect())
        });
        secondary
            .expect_fetch_details()
            .times(5)
            .returning(|imdb_id| Ok(secondary_details(imdb_id)));

        let mut trailers = trailers(true);
        trailers.expect_find_trailer().times(5).returning(|_| Ok(None));

        let search = search(primary(false), secondary, trailers);
        let result = search.search_by_mood("I feel so happy today", 1).await;

        let ids: Vec<_> = result.movies.iter().map(|m| m.external_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["tt0000001", "tt0000002", "tt0000003", "tt0000004", "tt0000005"]
        );
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn test_search_by_name_is_capped() {
        let mut secondary = secondary(true);
        secondary.expect_find_by_title().returning(|_| {
            Ok((1..=8)
                .map(|n| secondary_hit(&format!("tt{:07}", n)))
                .collect())
        });

        let search = search(primary(false), secondary, trailers(false));
        let movies = search.search_by_name("Star").await;

        assert_eq!(movies.len(), 5);
        assert_eq!(movies[4].external_id, "tt0000005");
    }

    #[tokio::test]
    async fn test_empty_primary_falls_back_with_default_pages() {
        let mut primary = primary(true);
        primary.expect_find_by_genre().times(1).returning(|_, _| Ok(Vec::new()));
        primary.expect_find_by_genre_page_count().never();

        let mut secondary = secondary(true);
        secondary
            .expect_find_by_genre_keyword()
            .times(1)
            .returning(|keyword| {
                assert_eq!(keyword, "horror");
                Ok(vec![secondary_hit("tt0000009")])
            });

        let search = search(primary, secondary, trailers(false));
        let result = search.search_by_mood("I am terrified of the dark", 2).await;

        assert_eq!(result.mood, Some(Mood::Scared));
        assert_eq!(result.total_pages, 1);
        // Trailer lookup is off, so the partial hit is returned as is.
        assert_eq!(result.movies, vec![secondary_hit("tt0000009")]);
    }

    #[tokio::test]
    async fn test_primary_error_falls_back() {
        let mut primary = primary(true);
        primary
            .expect_find_by_genre()
            .returning(|_, _| Err(ClientError::Timeout));

        let mut secondary = secondary(true);
        secondary
            .expect_find_by_genre_keyword()
            .returning(|_| Ok(vec![secondary_hit("tt0000010")]));

        let search = search(primary, secondary, trailers(false));
        let result = search.search_by_mood("so bored", 1).await;

        assert_eq!(result.movies.len(), 1);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_empty_result() {
        let mut primary = primary(true);
        primary.expect_find_by_genre().returning(|_, _| {
            Err(ClientError::Status {
                status: 500,
                body: String::new(),
            })
        });

        let mut secondary = secondary(true);
        secondary
            .expect_find_by_genre_keyword()
            .returning(|_| Err(ClientError::Timeout));

        let search = search(primary, secondary, trailers(true));
        let result = search.search_by_mood("calm evening", 1).await;

        assert!(result.movies.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.mood, Some(Mood::Calm));
    }

    #[tokio::test]
    async fn test_null_trailers_keep_every_record() {
        let mut secondary = secondary(true);
        secondary
            .expect_fetch_details()
            .returning(|imdb_id| Ok(secondary_details(imdb_id)));

        let mut trailers = trailers(true);
        trailers.expect_find_trailer().times(3).returning(|_| Ok(None));

        let search = search(primary(false), secondary, trailers);
        let movies = vec![
            primary_record(1),
            secondary_hit("tt0000002"),
            primary_record(3),
        ];
        let enriched = search.enrich_with_trailers(movies).await;

        assert_eq!(enriched.len(), 3);
        assert!(enriched.iter().all(|m| m.trailer.is_none()));
    }

    #[tokio::test]
    async fn test_trailer_errors_are_treated_as_missing() {
        let mut trailers = trailers(true);
        trailers
            .expect_find_trailer()
            .returning(|_| Err(ClientError::Timeout));

        let search = search(primary(false), secondary(false), trailers);
        let enriched = search.enrich_with_trailers(vec![primary_record(7)]).await;

        assert_eq!(enriched, vec![primary_record(7)]);
    }

    #[tokio::test]
    async fn test_primary_fields_survive_enrichment() {
        let mut trailers = trailers(true);
        trailers
            .expect_find_trailer()
            .returning(|title| Ok(Some(trailer_url(title))));

        let search = search(primary(false), MockSecondaryCatalog::new(), trailers);
        let original = primary_record(42);
        let enriched = search.enrich_with_trailers(vec![original.clone()]).await;

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].title, original.title);
        assert_eq!(enriched[0].year, original.year);
        assert_eq!(enriched[0].plot, original.plot);
        assert_eq!(enriched[0].poster, original.poster);
        assert_eq!(enriched[0].source, original.source);
        assert_eq!(enriched[0].trailer, Some(trailer_url("Movie 42")));
    }

    #[tokio::test]
    async fn test_secondary_detail_failure_drops_only_that_record() {
        let mut secondary = secondary(true);
        secondary.expect_fetch_details().returning(|imdb_id| {
            if imdb_id == "tt0000002" {
                Err(ClientError::NotFound("Incorrect IMDb ID.".to_string()))
            } else {
                Ok(secondary_details(imdb_id))
            }
        });

        let mut trailers = trailers(true);
        trailers.expect_find_trailer().returning(|_| Ok(None));

        let search = search(primary(false), secondary, trailers);
        let enriched = search
            .enrich_with_trailers(vec![
                secondary_hit("tt0000001"),
                secondary_hit("tt0000002"),
                secondary_hit("tt0000003"),
            ])
            .await;

        let ids: Vec<_> = enriched.iter().map(|m| m.external_id.as_str()).collect();
        assert_eq!(ids, vec!["tt0000001", "tt0000003"]);
        assert!(enriched.iter().all(|m| m.plot == "Full plot"));
    }

    #[tokio::test]
    async fn test_enrichment_is_skipped_without_trailer_service() {
        let search = search(primary(false), MockSecondaryCatalog::new(), trailers(false));
        let movies = vec![secondary_hit("tt0000001"), primary_record(2)];
        assert_eq!(search.enrich_with_trailers(movies.clone()).await, movies);
    }

    #[tokio::test]
    async fn test_search_by_name_trims_and_enriches() {
        let mut secondary = secondary(true);
        secondary.expect_find_by_title().times(1).returning(|name| {
            assert_eq!(name, "Alien");
            Ok(vec![secondary_hit("tt0078748")])
        });
        secondary
            .expect_fetch_details()
            .returning(|imdb_id| Ok(secondary_details(imdb_id)));

        let mut trailers = trailers(true);
        trailers
            .expect_find_trailer()
            .returning(|title| Ok(Some(trailer_url(title))));

        let search = search(primary(false), secondary, trailers);
        let movies = search.search_by_name("  Alien ").await;

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Detailed tt0078748");
        assert!(movies[0].trailer.is_some());
        assert!(search.search_by_name("   ").await.is_empty());
    }

    #[tokio::test]
    async fn test_handle_validates_before_calling_out() {
        let search = search(primary(false), secondary(false), trailers(false));

        let empty_name = search.handle(&SearchRequest::by_name("  ")).await;
        assert!(matches!(empty_name, Err(AppError::InvalidInput(msg)) if msg == EMPTY_NAME));

        let empty_mood = search.handle(&SearchRequest::by_mood("", 1)).await;
        assert!(matches!(empty_mood, Err(AppError::InvalidInput(msg)) if msg == EMPTY_DESCRIPTION));

        let bad_page = search.handle(&SearchRequest::by_mood("happy", 0)).await;
        assert!(matches!(bad_page, Err(AppError::InvalidInput(_))));

        let no_omdb = search.handle(&SearchRequest::by_name("Alien")).await;
        assert!(matches!(no_omdb, Err(AppError::ServiceUnavailable(msg)) if msg == MISSING_OMDB));

        let no_catalogs = search.handle(&SearchRequest::by_mood("happy", 1)).await;
        assert!(
            matches!(no_catalogs, Err(AppError::ServiceUnavailable(msg)) if msg == MISSING_CATALOGS)
        );
    }

    #[tokio::test]
    async fn test_handle_mood_with_only_secondary() {
        let mut secondary = secondary(true);
        secondary
            .expect_find_by_genre_keyword()
            .returning(|_| Ok(vec![secondary_hit("tt0000001")]));

        let search = search(primary(false), secondary, trailers(false));
        let result = search
            .handle(&SearchRequest::by_mood("feeling nostalgic", 2))
            .await
            .unwrap();

        assert_eq!(result.mood, Some(Mood::Nostalgic));
        assert_eq!(result.movies.len(), 1);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn test_polarity_fallback_drives_genre() {
        struct Gloomy;
        impl crate::services::PolarityScorer for Gloomy {
            fn polarity(&self, _text: &str) -> f64 {
                -0.9
            }
        }

        let mut secondary = secondary(true);
        secondary
            .expect_find_by_genre_keyword()
            .times(1)
            .returning(|keyword| {
                assert_eq!(keyword, "drama");
                Ok(Vec::new())
            });

        let classifier = MoodClassifier::new(Arc::new(Gloomy)).unwrap();
        let search = search_with(primary(false), secondary, trailers(false), classifier);
        let result = search.search_by_mood("it is tuesday", 1).await;

        assert_eq!(result.mood, Some(Mood::Sad));
        assert!(result.movies.is_empty());
    }

    #[test]
    fn test_service_status() {
        let search = search(primary(true), secondary(false), trailers(true));
        assert_eq!(
            search.service_status(),
            ServiceStatus {
                tmdb: true,
                omdb: false,
                youtube: true,
            }
        );
        assert_eq!(search.mood_catalog().len(), Mood::ALL.len());
    }
}
