#![forbid(unsafe_code)]

pub mod error;
pub mod question_source;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::{QuestionSourceError, QuizEngineError};
pub use question_source::{QuestionSource, load_questions, parse_questions};
pub use quiz::{
    ChoiceView, QuestionView, QuizEngine, QuizRenderer, QuizTimer, ResultsView,
};
