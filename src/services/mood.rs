//! Mood detection from free text
//!
//! Classification runs in two stages:
//! 1. Keyword rules: every keyword of `MOOD_RULES` is searched for in one pass
//!    (ASCII case-insensitive, substrings included) and the earliest rule with a
//!    hit decides the mood.
//! 2. Polarity fallback: when no keyword matches, a sentiment score in [-1, 1]
//!    picks between happy, sad and thoughtful.

use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Mood,
};

const HAPPY_POLARITY: f64 = 0.5;
const SAD_POLARITY: f64 = -0.3;

/// A keyword group: any keyword found as a substring selects `mood`
#[derive(Debug, Clone, Copy)]
pub struct MoodRule {
    pub mood: Mood,
    pub keywords: &'static [&'static str],
}

/// Keyword rules in priority order. Earlier rules win when several match.
pub const MOOD_RULES: &[MoodRule] = &[
    // Positive
    MoodRule {
        mood: Mood::Happy,
        keywords: &["happy", "joy", "cheerful", "playful", "celebratory", "amused", "entertained"],
    },
    MoodRule {
        mood: Mood::Excited,
        keywords: &["excited", "energetic", "thrilled", "adrenaline", "pumped", "intense"],
    },
    MoodRule {
        mood: Mood::Adventurous,
        keywords: &["adventurous", "adventure", "explore", "journey"],
    },
    MoodRule {
        mood: Mood::Inspired,
        keywords: &["inspired", "motivated", "hopeful", "optimistic"],
    },
    MoodRule {
        mood: Mood::Romantic,
        keywords: &["romantic", "love", "romance", "warm", "intimate"],
    },
    MoodRule {
        mood: Mood::Nostalgic,
        keywords: &["nostalgic", "nostalgia", "memories", "remember"],
    },
    // Negative
    MoodRule {
        mood: Mood::Sad,
        keywords: &["sad", "depressed", "melancholy", "lonely", "pessimistic"],
    },
    MoodRule {
        mood: Mood::Angry,
        keywords: &["angry", "furious", "mad", "frustrated", "stressed"],
    },
    MoodRule {
        mood: Mood::Scared,
        keywords: &["scared", "fear", "horror", "terrified", "anxious", "afraid"],
    },
    // Neutral / complex
    MoodRule {
        mood: Mood::Curious,
        keywords: &["curious", "wonder", "question", "learn", "discover"],
    },
    MoodRule {
        mood: Mood::Thoughtful,
        keywords: &["thoughtful", "contemplative", "reflective", "creative", "focused"],
    },
    MoodRule {
        mood: Mood::Mysterious,
        keywords: &["mysterious", "mystery", "suspenseful", "suspense"],
    },
    MoodRule {
        mood: Mood::Calm,
        keywords: &["calm", "peaceful", "meditative", "zen", "relaxed"],
    },
    // Entertainment
    MoodRule {
        mood: Mood::Bored,
        keywords: &["bored", "lazy", "silly", "witty", "sarcastic"],
    },
    // Thrill-seeking
    MoodRule {
        mood: Mood::Thrilled,
        keywords: &["dramatic", "tense", "thrilling"],
    },
    // Fantasy / escape
    MoodRule {
        mood: Mood::Dreamy,
        keywords: &["dreamy", "magical", "whimsical", "escapist", "imaginative", "fantasy"],
    },
    // Social
    MoodRule {
        mood: Mood::Social,
        keywords: &["social", "party", "festive", "friendly", "gathering"],
    },
];

/// Scores the sentiment of a text in [-1, 1]
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Word lexicon with polarity per entry
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("delighted", 0.7),
    ("delightful", 1.0),
    ("ecstatic", 0.9),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("marvelous", 1.0),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("positive", 0.23),
    ("superb", 1.0),
    ("terrific", 1.0),
    ("wonderful", 1.0),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bitter", -0.1),
    ("boring", -1.0),
    ("broken", -0.4),
    ("cruel", -1.0),
    ("dark", -0.15),
    ("disappointed", -0.75),
    ("disgusting", -1.0),
    ("dull", -0.31),
    ("gloomy", -0.8),
    ("heartbroken", -0.8),
    ("hopeless", -0.5),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("miserable", -1.0),
    ("negative", -0.3),
    ("painful", -0.7),
    ("poor", -0.4),
    ("rough", -0.1),
    ("sick", -0.71),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("ugly", -0.7),
    ("unhappy", -0.6),
    ("upset", -0.6),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Words that scale the next scored word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("super", 1.3),
    ("quite", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

const NEGATIONS: &[&str] = &["not", "never", "no", "isn't", "don't", "didn't", "can't", "won't"];

const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy)]
enum Term {
    Polarity(f64),
    Intensifier(f64),
    Negation,
}

/// Lexicon scorer: averages the polarity of every lexicon word, after applying
/// the preceding intensifier and negation to it.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: AhoCorasick,
    terms: Vec<Term>,
}

impl LexiconScorer {
    pub fn new() -> AppResult<Self> {
        let (patterns, terms): (Vec<&str>, Vec<Term>) = LEXICON
            .iter()
            .map(|&(word, polarity)| (word, Term::Polarity(polarity)))
            .chain(
                INTENSIFIERS
                    .iter()
                    .map(|&(word, factor)| (word, Term::Intensifier(factor))),
            )
            .chain(NEGATIONS.iter().map(|&word| (word, Term::Negation)))
            .unzip();

        let words = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .start_kind(StartKind::Anchored)
            .build(patterns)
            .map_err(|e| AppError::Internal(format!("Failed to build lexicon matcher: {e}")))?;

        Ok(Self { words, terms })
    }

    /// Whole-word lookup: the longest entry anchored at the start must span the word
    fn term(&self, word: &str) -> Option<Term> {
        self.words
            .find(Input::new(word).anchored(Anchored::Yes))
            .filter(|m| m.end() == word.len())
            .and_then(|m| self.terms.get(m.pattern().as_usize()).copied())
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let words = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty());

        let mut scores = Vec::new();
        let mut modifier = 1.0;
        let mut negated = false;

        for word in words {
            match self.term(word) {
                Some(Term::Negation) => {
                    negated = true;
                    continue;
                }
                Some(Term::Intensifier(factor)) => {
                    modifier *= factor;
                    continue;
                }
                Some(Term::Polarity(base)) => {
                    let mut score = base * modifier;
                    if negated {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score.clamp(-1.0, 1.0));
                }
                None => {}
            }
            modifier = 1.0;
            negated = false;
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

/// Maps free text to a [`Mood`]
#[derive(Clone)]
pub struct MoodClassifier {
    keywords: AhoCorasick,
    /// Index into `MOOD_RULES` for every keyword pattern
    rule_of: Vec<usize>,
    scorer: Arc<dyn PolarityScorer>,
}

impl MoodClassifier {
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> AppResult<Self> {
        let (patterns, rule_of): (Vec<&str>, Vec<usize>) = MOOD_RULES
            .iter()
            .enumerate()
            .flat_map(|(index, rule)| rule.keywords.iter().map(move |&keyword| (keyword, index)))
            .unzip();

        // Standard match kind so overlapping hits are all reported
        let keywords = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns)
            .map_err(|e| AppError::Internal(format!("Failed to build mood keyword matcher: {e}")))?;

        Ok(Self {
            keywords,
            rule_of,
            scorer,
        })
    }

    /// Keyword rules with the built-in lexicon as polarity fallback
    pub fn with_lexicon() -> AppResult<Self> {
        Self::new(Arc::new(LexiconScorer::new()?))
    }

    /// Highest-priority rule with a keyword anywhere in `text`
    fn matching_rule(&self, text: &str) -> Option<&'static MoodRule> {
        self.keywords
            .find_overlapping_iter(text)
            .filter_map(|m| self.rule_of.get(m.pattern().as_usize()).copied())
            .min()
            .and_then(|index| MOOD_RULES.get(index))
    }

    /// Detects the mood of `text`; empty input is `Mood::Thoughtful`
    pub fn detect_mood(&self, text: &str) -> Mood {
        let text = text.trim();
        if text.is_empty() {
            return Mood::default();
        }

        if let Some(rule) = self.matching_rule(text) {
            return rule.mood;
        }

        let polarity = self.scorer.polarity(text);
        if polarity > HAPPY_POLARITY {
            Mood::Happy
        } else if polarity < SAD_POLARITY {
            Mood::Sad
        } else {
            Mood::Thoughtful
        }
    }
}
