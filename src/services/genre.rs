use crate::models::{Mood, MoodGenre};

/// Catalog genres a mood can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Documentary,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
}

impl Genre {
    /// Genre id in the primary catalog (TMDb)
    pub fn tmdb_id(&self) -> u32 {
        match self {
            Genre::Action => 28,
            Genre::Adventure => 12,
            Genre::Comedy => 35,
            Genre::Documentary => 99,
            Genre::Drama => 18,
            Genre::Fantasy => 14,
            Genre::Horror => 27,
            Genre::Mystery => 9648,
            Genre::Romance => 10749,
        }
    }

    /// Search keyword in the secondary catalog (OMDb)
    pub fn keyword(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Adventure => "adventure",
            Genre::Comedy => "comedy",
            Genre::Documentary => "documentary",
            Genre::Drama => "drama",
            Genre::Fantasy => "fantasy",
            Genre::Horror => "horror",
            Genre::Mystery => "mystery",
            Genre::Romance => "romance",
        }
    }
}

/// Genre used for labels outside the table
pub const DEFAULT_GENRE: Genre = Genre::Drama;

/// How a mood is searched in each catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreMapping {
    pub primary_genre_id: u32,
    pub secondary_keyword: &'static str,
}

impl From<Genre> for GenreMapping {
    fn from(genre: Genre) -> Self {
        Self {
            primary_genre_id: genre.tmdb_id(),
            secondary_keyword: genre.keyword(),
        }
    }
}

const MOOD_GENRES: &[(Mood, Genre)] = &[
    // Positive
    (Mood::Happy, Genre::Comedy),
    (Mood::Excited, Genre::Action),
    (Mood::Adventurous, Genre::Adventure),
    (Mood::Inspired, Genre::Drama),
    (Mood::Romantic, Genre::Romance),
    (Mood::Nostalgic, Genre::Drama),
    (Mood::Hopeful, Genre::Drama),
    (Mood::Energetic, Genre::Action),
    (Mood::Playful, Genre::Comedy),
    (Mood::Celebratory, Genre::Comedy),
    // Negative
    (Mood::Sad, Genre::Drama),
    (Mood::Angry, Genre::Action),
    (Mood::Scared, Genre::Horror),
    (Mood::Anxious, Genre::Horror),
    (Mood::Depressed, Genre::Drama),
    (Mood::Frustrated, Genre::Action),
    (Mood::Lonely, Genre::Drama),
    (Mood::Stressed, Genre::Action),
    (Mood::Melancholy, Genre::Drama),
    (Mood::Pessimistic, Genre::Drama),
    // Neutral / complex
    (Mood::Curious, Genre::Documentary),
    (Mood::Thoughtful, Genre::Drama),
    (Mood::Mysterious, Genre::Mystery),
    (Mood::Contemplative, Genre::Drama),
    (Mood::Reflective, Genre::Drama),
    (Mood::Creative, Genre::Drama),
    (Mood::Focused, Genre::Documentary),
    (Mood::Calm, Genre::Drama),
    (Mood::Peaceful, Genre::Drama),
    (Mood::Meditative, Genre::Drama),
    // Entertainment
    (Mood::Bored, Genre::Comedy),
    (Mood::Lazy, Genre::Comedy),
    (Mood::Silly, Genre::Comedy),
    (Mood::Witty, Genre::Comedy),
    (Mood::Sarcastic, Genre::Comedy),
    (Mood::Cheerful, Genre::Comedy),
    (Mood::Amused, Genre::Comedy),
    (Mood::Entertained, Genre::Comedy),
    // Thrill-seeking
    (Mood::Thrilled, Genre::Action),
    (Mood::Adrenaline, Genre::Action),
    (Mood::Pumped, Genre::Action),
    (Mood::Intense, Genre::Action),
    (Mood::Dramatic, Genre::Drama),
    (Mood::Suspenseful, Genre::Mystery),
    (Mood::Tense, Genre::Action),
    // Fantasy / escape
    (Mood::Dreamy, Genre::Fantasy),
    (Mood::Magical, Genre::Fantasy),
    (Mood::Whimsical, Genre::Fantasy),
    (Mood::Escapist, Genre::Fantasy),
    (Mood::Imaginative, Genre::Fantasy),
    (Mood::Wonder, Genre::Fantasy),
    // Social
    (Mood::Social, Genre::Comedy),
    (Mood::Party, Genre::Comedy),
    (Mood::Festive, Genre::Comedy),
    (Mood::Friendly, Genre::Comedy),
    (Mood::Warm, Genre::Romance),
    (Mood::Intimate, Genre::Romance),
];

/// Table lookups from mood labels to catalog genres.
///
/// Labels are taken as strings so that values outside the mood catalog can be
/// looked up; those fall back to [`DEFAULT_GENRE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreMapper;

impl GenreMapper {
    fn genre(&self, mood: &str) -> Option<Genre> {
        MOOD_GENRES
            .iter()
            .find(|(entry, _)| entry.as_str() == mood)
            .map(|(_, genre)| *genre)
    }

    pub fn is_known(&self, mood: impl AsRef<str>) -> bool {
        self.genre(mood.as_ref()).is_some()
    }

    pub fn mapping(&self, mood: impl AsRef<str>) -> GenreMapping {
        self.genre(mood.as_ref()).unwrap_or(DEFAULT_GENRE).into()
    }

    pub fn primary_genre_id(&self, mood: impl AsRef<str>) -> u32 {
        self.mapping(mood).primary_genre_id
    }

    pub fn secondary_genre_keyword(&self, mood: impl AsRef<str>) -> &'static str {
        self.mapping(mood).secondary_keyword
    }

    /// The full table, in catalog order
    pub fn catalog(&self) -> Vec<MoodGenre> {
        MOOD_GENRES
            .iter()
            .map(|(mood, genre)| MoodGenre {
                mood: *mood,
                genre_id: genre.tmdb_id(),
                genre_keyword: genre.keyword(),
            })
            .collect()
    }
}
