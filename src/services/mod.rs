pub mod genre;
pub mod mood;
pub mod movie_search;
pub mod providers;

pub use genre::{Genre, GenreMapper, GenreMapping};
pub use mood::{LexiconScorer, MoodClassifier, PolarityScorer};
pub use movie_search::MovieSearch;
