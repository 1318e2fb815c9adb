use std::path::{Path, PathBuf};

use serde::Deserialize;

use quiz_core::model::{QuestionDraft, QuestionSet};

use crate::error::QuestionSourceError;

/// Where a quiz takes its questions from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuestionSource {
    /// The built-in machine learning questions.
    #[default]
    Reference,
    /// A JSON question file.
    File(PathBuf),
}

impl QuestionSource {
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the file cannot be read, parsed or validated.
    pub async fn load(&self) -> Result<QuestionSet, QuestionSourceError> {
        match self {
            QuestionSource::Reference => Ok(QuestionSet::reference()),
            QuestionSource::File(path) => load_questions(path).await,
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            QuestionSource::Reference => "built-in questions".to_string(),
            QuestionSource::File(path) => path.display().to_string(),
        }
    }
}

/// Accepted file shapes: a bare array, or an object with a `questions` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    List(Vec<QuestionDraft>),
    Wrapped { questions: Vec<QuestionDraft> },
}

/// Parse and validate questions from JSON text.
///
/// # Errors
///
/// Returns `QuestionSourceError::Json` for malformed input and
/// `QuestionSourceError::Invalid` when a question fails validation.
pub fn parse_questions(raw: &str) -> Result<QuestionSet, QuestionSourceError> {
    let drafts = match serde_json::from_str::<QuestionFile>(raw)? {
        QuestionFile::List(drafts) | QuestionFile::Wrapped { questions: drafts } => drafts,
    };
    Ok(QuestionSet::from_drafts(drafts)?)
}

/// Read a JSON question file.
///
/// # Errors
///
/// Returns `QuestionSourceError::Io` if the file cannot be read, otherwise see
/// [`parse_questions`].
pub async fn load_questions(path: impl AsRef<Path>) -> Result<QuestionSet, QuestionSourceError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await?;
    let questions = parse_questions(&raw)?;
    tracing::debug!(path = %path.display(), count = questions.len(), "loaded question file");
    Ok(questions)
}
