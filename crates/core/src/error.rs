use thiserror::Error;

use crate::model::{QuestionError, QuestionSetError, QuizError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuestionSet(#[from] QuestionSetError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
