//! Score, classify and track sentiment in arbitrary text.
//!
//! The pipeline mirrors an interactive analysis session: a submission goes
//! through an optional translation pre-step, gets scored for polarity
//! (negative to positive) and subjectivity (factual to opinionated), the
//! polarity is banded into a discrete sentiment label with display metadata,
//! and every distinct text is logged into an insertion-ordered session
//! history that can feed a scatter plot or a textual log.
//!
//! Scoring, translation and spelling correction sit behind the [`Scorer`],
//! [`Translator`] and [`Corrector`] traits, so deployments can swap in their
//! own backends and tests can use deterministic fakes. The crate ships a
//! lexicon-based scorer ([`Lexicon`]) and a trainable frequency-dictionary
//! corrector ([`SpellingModel`]); translation backends are supplied by the
//! caller.
//!
//! # Examples
//!
//! Analyzing text with the built-in lexicon:
//!
//! ```
//! use sentimeter::{AnalysisHistory, Analyzer, Language, Lexicon, SentimentBand};
//!
//! let analyzer = Analyzer::new(Lexicon::builtin());
//! let mut history = AnalysisHistory::new();
//!
//! let analysis = analyzer
//!     .analyze("This movie is wonderful", Language::English, &mut history)
//!     .unwrap()
//!     .expect("non-empty input always produces an analysis");
//!
//! assert_eq!(analysis.band, SentimentBand::VeryPositive);
//! assert_eq!(analysis.band.label(), "Very Positive");
//! assert_eq!(history.len(), 1);
//! ```
//!
//! Fixing misspellings with a model trained on a corpus:
//!
//! ```
//! use sentimeter::SpellingModel;
//!
//! let mut model = SpellingModel::new();
//! model.train_on_text("the quick brown fox jumps over the lazy dog");
//!
//! assert_eq!(model.correct("teh quick borwn fox"), "the quick brown fox");
//! ```

mod analyze;
mod classify;
mod correct;
mod errors;
mod history;
mod lexicon;
mod tokenizer;
mod utils;

pub use crate::analyze::{
    correct_with, Analysis, Analyzer, Correction, Corrector, Language, NoTranslation, Score,
    Scorer, Translator,
};
pub use crate::classify::{Policy, SentimentBand, SubjectivityTier};
pub use crate::correct::SpellingModel;
pub use crate::errors::{
    AnalysisError, BoxedError, ModelLoadingError, ModelSavingError, UnknownLanguage,
};
pub use crate::history::{AnalysisHistory, AnalysisRecord, ScatterPoint};
pub use crate::lexicon::{Lexicon, WordWeights};
