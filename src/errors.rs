use thiserror::Error;

/// Boxed error type returned by the capability traits, so real backends and
/// deterministic test fakes share one seam.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ModelLoadingError {
    #[error("cannot read model from file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("malformed model file: {0}")]
    Deserialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ModelSavingError {
    #[error("cannot write model into file: {0}")]
    WriteFile(#[from] std::io::Error),
    #[error("can't serialize model: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures surfaced by the analysis pipeline.
///
/// All of them are recoverable; a failed analysis never touches the session
/// history.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("sentiment scoring failed: {0}")]
    Scoring(#[source] BoxedError),
    #[error("translation failed: {0}")]
    Translation(#[source] BoxedError),
    #[error("spelling correction failed: {0}")]
    Correction(#[source] BoxedError),
}

#[derive(Error, Debug)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);
