use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::analyze::{Score, Scorer};
use crate::errors::{BoxedError, ModelLoadingError, ModelSavingError};
use crate::tokenizer::words;

/// Polarity flip applied to the word following a negator.
const NEGATION_FACTOR: f64 = -0.5;

/// Sentiment weights for one word.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WordWeights {
    /// Negative-to-positive leaning, in [-1, 1].
    pub polarity: f64,
    /// Factual-to-opinionated leaning, in [0, 1].
    pub subjectivity: f64,
    /// Multiplier a modifier word applies to the next scored word.
    /// 1.0 for ordinary words.
    pub intensity: f64,
}

impl WordWeights {
    fn is_modifier(self) -> bool {
        (self.intensity - 1.0).abs() > f64::EPSILON
    }
}

/// Word-level sentiment lexicon: the built-in scorer.
///
/// See [crate documentation](index.html) for examples.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, WordWeights>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::builtin()
    }
}

impl Lexicon {
    /// A lexicon with no entries, as a base for fully custom vocabularies.
    pub fn empty() -> Self {
        Lexicon {
            entries: HashMap::new(),
        }
    }

    /// The built-in general-English lexicon.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Save this lexicon into a file with the given filename.
    /// The format is simple JSON right now.
    pub fn save_to_file(&self, filename: &str) -> Result<(), ModelSavingError> {
        let serialized = serde_json::to_string(&self)?;
        File::create(filename)?.write_all(serialized.as_bytes())?;

        Ok(())
    }

    /// Load a previously saved lexicon from a file.
    pub fn load_from_file(filename: &str) -> Result<Self, ModelLoadingError> {
        let mut string = String::new();
        File::open(filename)?.read_to_string(&mut string)?;
        let lexicon = serde_json::from_str(&string)?;

        Ok(lexicon)
    }

    /// Add or replace an ordinary scored word.
    pub fn insert(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.entries.insert(
            word.to_lowercase(),
            WordWeights {
                polarity,
                subjectivity,
                intensity: 1.0,
            },
        );
    }

    /// Add or replace a modifier word ("very", "slightly", ...).
    pub fn insert_modifier(&mut self, word: &str, intensity: f64) {
        self.entries.insert(
            word.to_lowercase(),
            WordWeights {
                polarity: 0.0,
                subjectivity: 0.0,
                intensity,
            },
        );
    }

    pub fn get(&self, word: &str) -> Option<WordWeights> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score a text: mean polarity and subjectivity over the words the
    /// lexicon knows, with modifier and negation handling.
    ///
    /// A modifier scales the next scored word; a negator ("not", "no",
    /// "never", "*n't") flips it by a factor of -0.5; an unknown word
    /// clears any pending modifier state. Texts without a single known word
    /// come back as (0.0, 0.0).
    pub fn score(&self, text: &str) -> Score {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut scored_words = 0u32;

        let mut negated = false;
        let mut intensity = 1.0;

        for token in words(text) {
            let word = token.normalized.as_ref();

            if is_negator(word) {
                negated = true;
                continue;
            }

            match self.entries.get(word) {
                Some(weights) if weights.is_modifier() => {
                    intensity *= weights.intensity;
                }
                Some(weights) => {
                    let mut polarity = (weights.polarity * intensity).clamp(-1.0, 1.0);
                    if negated {
                        polarity *= NEGATION_FACTOR;
                    }
                    let subjectivity = (weights.subjectivity * intensity).clamp(0.0, 1.0);

                    polarity_sum += polarity;
                    subjectivity_sum += subjectivity;
                    scored_words += 1;

                    negated = false;
                    intensity = 1.0;
                }
                None => {
                    negated = false;
                    intensity = 1.0;
                }
            }
        }

        if scored_words == 0 {
            return Score::default();
        }

        Score {
            polarity: polarity_sum / f64::from(scored_words),
            subjectivity: subjectivity_sum / f64::from(scored_words),
        }
    }
}

impl Scorer for Lexicon {
    fn score(&self, text: &str) -> Result<Score, BoxedError> {
        Ok(Lexicon::score(self, text))
    }
}

fn is_negator(word: &str) -> bool {
    matches!(word, "not" | "no" | "never" | "neither" | "nor" | "cannot") || word.ends_with("n't")
}

lazy_static! {
    static ref BUILTIN: Lexicon = {
        let mut lexicon = Lexicon::empty();
        for &(word, polarity, subjectivity) in BUILTIN_WORDS {
            lexicon.insert(word, polarity, subjectivity);
        }
        for &(word, intensity) in BUILTIN_MODIFIERS {
            lexicon.insert_modifier(word, intensity);
        }
        lexicon
    };
}

static BUILTIN_WORDS: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("happy", 0.8, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("delicious", 1.0, 1.0),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("pleased", 0.5, 0.8),
    ("impressive", 1.0, 1.0),
    ("superb", 1.0, 1.0),
    ("brilliant", 0.9, 0.9),
    ("recommend", 0.4, 0.3),
    ("fine", 0.4, 0.4),
    ("helpful", 0.4, 0.3),
    ("comfortable", 0.5, 0.7),
    ("fresh", 0.3, 0.4),
    ("friendly", 0.5, 0.6),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.5, 0.6),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("poor", -0.4, 0.6),
    ("broken", -0.4, 0.4),
    ("useless", -0.5, 0.4),
    ("boring", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("wrong", -0.5, 0.5),
    ("annoying", -0.8, 1.0),
    ("slow", -0.3, 0.4),
    ("pathetic", -1.0, 1.0),
    ("dreadful", -1.0, 1.0),
    ("mediocre", -0.5, 0.7),
    ("nasty", -0.8, 1.0),
    ("painful", -0.7, 0.6),
    ("weak", -0.3, 0.4),
    ("predictable", -0.3, 0.6),
    ("rude", -0.6, 0.9),
    ("dirty", -0.6, 0.7),
    ("expensive", -0.3, 0.5),
];

static BUILTIN_MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("quite", 1.1),
    ("fairly", 0.9),
    ("somewhat", 0.9),
    ("slightly", 0.8),
    ("barely", 0.7),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_known_word() {
        let score = Lexicon::builtin().score("good");
        assert_eq!(score.polarity, 0.7);
        assert_eq!(score.subjectivity, 0.6);
    }

    #[test]
    fn scores_are_averaged_over_known_words() {
        let score = Lexicon::builtin().score("the good and the bad");
        assert!(close(score.polarity, 0.0));
        assert!(close(score.subjectivity, (0.6 + 0.67) / 2.0));
    }

    #[test]
    fn negation_flips_polarity() {
        let score = Lexicon::builtin().score("not good");
        assert!(close(score.polarity, 0.7 * NEGATION_FACTOR));
        assert_eq!(score.subjectivity, 0.6);

        let contracted = Lexicon::builtin().score("isn't good");
        assert!(close(contracted.polarity, 0.7 * NEGATION_FACTOR));
    }

    #[test]
    fn modifiers_scale_the_next_word() {
        let score = Lexicon::builtin().score("very good");
        assert!(close(score.polarity, 0.7 * 1.3));
        assert!(close(score.subjectivity, 0.6 * 1.3));

        let dampened = Lexicon::builtin().score("slightly good");
        assert!(close(dampened.polarity, 0.7 * 0.8));
    }

    #[test]
    fn scaled_scores_stay_in_range() {
        let score = Lexicon::builtin().score("extremely excellent");
        assert_eq!(score.polarity, 1.0);
        assert_eq!(score.subjectivity, 1.0);
    }

    #[test]
    fn unknown_word_breaks_a_modifier_chain() {
        let score = Lexicon::builtin().score("very strange good");
        assert_eq!(score.polarity, 0.7);

        let negated = Lexicon::builtin().score("not a good");
        assert_eq!(negated.polarity, 0.7);
    }

    #[test]
    fn unknown_words_score_zero() {
        assert_eq!(Lexicon::builtin().score("lorem ipsum dolor"), Score::default());
        assert_eq!(Lexicon::builtin().score(""), Score::default());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let score = Lexicon::builtin().score("GOOD");
        assert_eq!(score.polarity, 0.7);
    }

    #[test]
    fn custom_entries_override_builtin_ones() {
        let mut lexicon = Lexicon::builtin();
        lexicon.insert("good", -1.0, 1.0);
        assert_eq!(lexicon.score("good").polarity, -1.0);
    }

    #[test]
    fn saved_lexicon_loads_back() {
        let mut lexicon = Lexicon::empty();
        lexicon.insert("shiny", 0.6, 0.9);
        lexicon.insert_modifier("madly", 1.2);

        let path = std::env::temp_dir().join(format!("lexicon-{}.json", std::process::id()));
        let filename = path.to_str().unwrap();

        lexicon.save_to_file(filename).unwrap();
        let loaded = Lexicon::load_from_file(filename).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.get("shiny"), lexicon.get("shiny"));
        assert_eq!(loaded.len(), 2);
        assert!(close(loaded.score("madly shiny").polarity, 0.6 * 1.2));
    }
}
