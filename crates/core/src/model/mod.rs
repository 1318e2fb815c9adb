mod outcome;
mod question;
mod question_set;
mod quiz;
mod settings;

pub use outcome::{QuizOutcome, SubmitReason};
pub use question::{MAX_CHOICES, MIN_CHOICES, Question, QuestionDraft, QuestionError, choice_letter};
pub use question_set::{QuestionSet, QuestionSetError};
pub use quiz::{QuizError, QuizEvent, QuizPhase, QuizState, Transition};
pub use settings::{QuizSettings, QuizSettingsDraft, SettingsError};
