use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Declares the closed mood catalog: the enum, its labels and `Mood::ALL`.
macro_rules! mood_catalog {
    ($($variant:ident => $label:literal),+ $(,)?) => {
        /// Emotional tone detected from a user's free-text description
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Mood {
            $($variant),+
        }

        impl Mood {
            /// Every label in the catalog, in table order
            pub const ALL: &'static [Mood] = &[$(Mood::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Mood::$variant => $label),+
                }
            }
        }

        impl FromStr for Mood {
            type Err = UnknownMood;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Mood::$variant),)+
                    other => Err(UnknownMood(other.to_string())),
                }
            }
        }
    };
}

mood_catalog! {
    // Positive
    Happy => "happy",
    Excited => "excited",
    Adventurous => "adventurous",
    Inspired => "inspired",
    Romantic => "romantic",
    Nostalgic => "nostalgic",
    Hopeful => "hopeful",
    Energetic => "energetic",
    Playful => "playful",
    Celebratory => "celebratory",
    // Negative
    Sad => "sad",
    Angry => "angry",
    Scared => "scared",
    Anxious => "anxious",
    Depressed => "depressed",
    Frustrated => "frustrated",
    Lonely => "lonely",
    Stressed => "stressed",
    Melancholy => "melancholy",
    Pessimistic => "pessimistic",
    // Neutral / complex
    Curious => "curious",
    Thoughtful => "thoughtful",
    Mysterious => "mysterious",
    Contemplative => "contemplative",
    Reflective => "reflective",
    Creative => "creative",
    Focused => "focused",
    Calm => "calm",
    Peaceful => "peaceful",
    Meditative => "meditative",
    // Entertainment
    Bored => "bored",
    Lazy => "lazy",
    Silly => "silly",
    Witty => "witty",
    Sarcastic => "sarcastic",
    Cheerful => "cheerful",
    Amused => "amused",
    Entertained => "entertained",
    // Thrill-seeking
    Thrilled => "thrilled",
    Adrenaline => "adrenaline",
    Pumped => "pumped",
    Intense => "intense",
    Dramatic => "dramatic",
    Suspenseful => "suspenseful",
    Tense => "tense",
    // Fantasy / escape
    Dreamy => "dreamy",
    Magical => "magical",
    Whimsical => "whimsical",
    Escapist => "escapist",
    Imaginative => "imaginative",
    Wonder => "wonder",
    // Social
    Social => "social",
    Party => "party",
    Festive => "festive",
    Friendly => "friendly",
    Warm => "warm",
    Intimate => "intimate",
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Thoughtful
    }
}

impl AsRef<str> for Mood {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood label: {0}")]
pub struct UnknownMood(pub String);
