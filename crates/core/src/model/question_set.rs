use thiserror::Error;

use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("a quiz needs at least one question")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Fixed, ordered, non-empty list of questions for a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        Ok(Self { questions })
    }

    /// Validate every draft, keeping source order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Invalid` for the first draft that fails validation,
    /// or `QuestionSetError::Empty` if there are no drafts.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuestionSetError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| QuestionSetError::Invalid { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// The built-in machine learning quiz shipped with the site.
    ///
    /// # Panics
    ///
    /// Panics if a built-in question fails validation.
    #[must_use]
    pub fn reference() -> Self {
        let drafts = vec![
            QuestionDraft::new(
                "What is Machine Learning primarily concerned with?",
                [
                    "Writing code manually",
                    "Systems that learn from data",
                    "Building hardware",
                    "Network configuration",
                ],
                1,
            ),
            QuestionDraft::new(
                "Which type of learning uses labeled data?",
                [
                    "Unsupervised Learning",
                    "Supervised Learning",
                    "Reinforcement Learning",
                    "Transfer Learning",
                ],
                1,
            ),
            QuestionDraft::new(
                "What is a neural network inspired by?",
                ["Computer hardware", "Human brain", "Solar system", "Ocean waves"],
                1,
            ),
            QuestionDraft::new(
                "Which algorithm is commonly used for classification?",
                ["Linear Regression", "Logistic Regression", "K-Means", "PCA"],
                1,
            ),
            QuestionDraft::new(
                "What does 'overfitting' mean in ML?",
                [
                    "Model is too simple",
                    "Model performs well on training but poorly on test data",
                    "Model is perfectly trained",
                    "Model has no bias",
                ],
                1,
            ),
        ];

        Self::from_drafts(drafts).expect("built-in questions should be valid")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
