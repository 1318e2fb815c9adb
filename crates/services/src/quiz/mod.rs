mod collaborators;
mod engine;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizEngineError;
pub use collaborators::{QuizRenderer, QuizTimer};
pub use engine::QuizEngine;
pub use view::{ChoiceView, QuestionView, ResultsView};
