use crate::quiz::view::{QuestionView, ResultsView};

/// Surface that draws the quiz. The engine never knows how drawing happens.
pub trait QuizRenderer {
    /// Draw the current question with its recorded selection, if any.
    fn show_question(&mut self, view: &QuestionView);

    /// Update the `MM:SS` countdown label.
    fn show_countdown(&mut self, label: &str);

    /// Hide the question view and show the results.
    fn show_results(&mut self, view: &ResultsView);
}

/// Once-per-second scheduler driving the countdown.
///
/// Implementations deliver `QuizEvent::Tick { attempt }` back to the engine
/// for the attempt passed to `start`.
pub trait QuizTimer {
    /// Begin ticking for `attempt`. Engines always `cancel` first.
    fn start(&mut self, attempt: u32);

    /// Stop ticking. Must be safe to call when nothing is running.
    fn cancel(&mut self);
}
