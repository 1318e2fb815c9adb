use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest choices a question may offer.
pub const MIN_CHOICES: usize = 2;

/// Most choices a question may offer; one per letter `A`..=`Z`.
pub const MAX_CHOICES: usize = 26;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least {MIN_CHOICES} choices, got {len}")]
    TooFewChoices { len: usize },

    #[error("question allows at most {MAX_CHOICES} choices, got {len}")]
    TooManyChoices { len: usize },

    #[error("choice {index} cannot be empty")]
    EmptyChoice { index: usize },

    #[error("correct choice {index} is out of range for {len} choices")]
    CorrectChoiceOutOfRange { index: usize, len: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it arrives from a question source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct: usize,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        correct: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct,
        }
    }

    /// Trim and validate the draft.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any choice is blank, the choice count is
    /// outside `MIN_CHOICES..=MAX_CHOICES`, or `correct` does not index a choice.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let len = self.choices.len();
        if len < MIN_CHOICES {
            return Err(QuestionError::TooFewChoices { len });
        }
        if len > MAX_CHOICES {
            return Err(QuestionError::TooManyChoices { len });
        }

        let mut choices = Vec::with_capacity(len);
        for (index, choice) in self.choices.into_iter().enumerate() {
            let choice = choice.trim().to_string();
            if choice.is_empty() {
                return Err(QuestionError::EmptyChoice { index });
            }
            choices.push(choice);
        }

        if self.correct >= len {
            return Err(QuestionError::CorrectChoiceOutOfRange {
                index: self.correct,
                len,
            });
        }

        Ok(Question {
            prompt,
            choices,
            correct: self.correct,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// Choice order is significant: it drives the `A`/`B`/`C`/`D` lettering and
/// answer matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct: usize,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn correct_choice(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        self.correct == choice
    }
}

/// Display letter for a zero-based choice index (`0` → `A`).
///
/// Indices past `Z` fall back to `?`; validated questions never reach them.
#[must_use]
pub fn choice_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|value| usize::from(*value) < MAX_CHOICES)
        .map_or('?', |value| char::from(b'A' + value))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_is_trimmed() {
        let question = QuestionDraft::new("  What?  ", [" yes ", "no"], 0)
            .validate()
            .unwrap();

        assert_eq!(question.prompt(), "What?");
        assert_eq!(question.choices(), ["yes".to_string(), "no".to_string()]);
        assert!(question.is_correct(0));
        assert!(!question.is_correct(1));
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let err = QuestionDraft::new("   ", ["a", "b"], 0).validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn choice_count_bounds_are_enforced() {
        let err = QuestionDraft::new("Q", ["only"], 0).validate().unwrap_err();
        assert_eq!(err, QuestionError::TooFewChoices { len: 1 });

        let many: Vec<String> = (0..27).map(|i| format!("c{i}")).collect();
        let err = QuestionDraft::new("Q", many, 0).validate().unwrap_err();
        assert_eq!(err, QuestionError::TooManyChoices { len: 27 });
    }

    #[test]
    fn blank_choice_reports_its_index() {
        let err = QuestionDraft::new("Q", ["a", " ", "c"], 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyChoice { index: 1 });
    }

    #[test]
    fn correct_index_must_address_a_choice() {
        let err = QuestionDraft::new("Q", ["a", "b", "c", "d"], 4)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::CorrectChoiceOutOfRange { index: 4, len: 4 });
    }

    #[test]
    fn letters_follow_choice_order() {
        assert_eq!(choice_letter(0), 'A');
        assert_eq!(choice_letter(3), 'D');
        assert_eq!(choice_letter(25), 'Z');
        assert_eq!(choice_letter(26), '?');
    }
}
