use std::borrow::Cow;
use std::str::FromStr;

use crate::classify::{Policy, SentimentBand};
use crate::errors::{AnalysisError, BoxedError, UnknownLanguage};
use crate::history::AnalysisHistory;

/// Raw output of a sentiment scorer: polarity in [-1, 1], subjectivity
/// in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Score {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Something that can score the sentiment of a text.
pub trait Scorer {
    fn score(&self, text: &str) -> Result<Score, BoxedError>;
}

/// Something that can translate a text between languages.
pub trait Translator {
    fn translate(&self, text: &str, source: Language, dest: Language)
        -> Result<String, BoxedError>;
}

/// Something that can fix misspellings in a text.
pub trait Corrector {
    fn correct(&self, text: &str) -> Result<String, BoxedError>;
}

/// Input language selector. Scoring operates on English text; any other
/// input language runs the translation pre-step first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// ISO 639-1 code, as translation backends expect it.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            _ => Err(UnknownLanguage(s.to_owned())),
        }
    }
}

/// Passthrough translator for setups without a translation backend: text is
/// scored as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(
        &self,
        text: &str,
        _source: Language,
        _dest: Language,
    ) -> Result<String, BoxedError> {
        Ok(text.to_owned())
    }
}

/// Result of one successful analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub polarity: f64,
    pub subjectivity: f64,
    pub band: SentimentBand,
}

/// Result of running a text through a spelling corrector.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
}

impl Correction {
    pub fn changed(&self) -> bool {
        self.original != self.corrected
    }
}

/// The analysis pipeline: optional translation, scoring, banding, and the
/// session history append.
///
/// The analyzer holds no session state. The history is constructed by the
/// caller, one per session, and passed into [`analyze`](Analyzer::analyze).
///
/// See [crate documentation](index.html) for examples.
pub struct Analyzer<S, T = NoTranslation> {
    scorer: S,
    translator: T,
    policy: Policy,
}

impl<S: Scorer> Analyzer<S, NoTranslation> {
    /// Analyzer without a translation backend.
    pub fn new(scorer: S) -> Self {
        Analyzer {
            scorer,
            translator: NoTranslation,
            policy: Policy::default(),
        }
    }
}

impl<S: Scorer, T: Translator> Analyzer<S, T> {
    pub fn with_translator(scorer: S, translator: T) -> Self {
        Analyzer {
            scorer,
            translator,
            policy: Policy::default(),
        }
    }

    /// Switch the banding policy; the default is [`Policy::FiveBand`].
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Analyze one submission and log it into the session history.
    ///
    /// The empty string is a no-op: nothing is scored, nothing is recorded,
    /// and `Ok(None)` comes back. The history stores the original input
    /// text, not the translation, and deduplicates repeated submissions.
    pub fn analyze(
        &self,
        text: &str,
        language: Language,
        history: &mut AnalysisHistory,
    ) -> Result<Option<Analysis>, AnalysisError> {
        if text.is_empty() {
            return Ok(None);
        }

        let scored_text = if language == Language::English {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(
                self.translator
                    .translate(text, language, Language::English)
                    .map_err(AnalysisError::Translation)?,
            )
        };

        let score = self
            .scorer
            .score(&scored_text)
            .map_err(AnalysisError::Scoring)?;

        let polarity = score.polarity.clamp(-1.0, 1.0);
        let subjectivity = score.subjectivity.clamp(0.0, 1.0);

        history.record(text, polarity, subjectivity);

        Ok(Some(Analysis {
            polarity,
            subjectivity,
            band: self.policy.classify(polarity),
        }))
    }
}

/// Run a text through a corrector, with the same empty-input rule as
/// [`Analyzer::analyze`].
pub fn correct_with<C: Corrector>(
    corrector: &C,
    text: &str,
) -> Result<Option<Correction>, AnalysisError> {
    if text.is_empty() {
        return Ok(None);
    }

    let corrected = corrector.correct(text).map_err(AnalysisError::Correction)?;

    Ok(Some(Correction {
        original: text.to_owned(),
        corrected,
    }))
}
