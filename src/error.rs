//! Error handling for the resume intelligence engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeIntelError {
    #[error("Text processing error: {0}")]
    Processing(String),

    #[error("Job analysis error: {0}")]
    JobAnalysis(String),

    #[error("Insight generation error: {0}")]
    InsightGeneration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, ResumeIntelError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeIntelError {
    fn from(err: anyhow::Error) -> Self {
        ResumeIntelError::Processing(err.to_string())
    }
}
