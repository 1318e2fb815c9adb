//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionSetError, QuizError};

/// Errors emitted by `QuizEngine`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizEngineError {
    #[error("quiz has not been started")]
    NotStarted,
    #[error("quiz already started; reset it instead")]
    AlreadyStarted,
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted while loading a question source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("question file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionSetError),
}
