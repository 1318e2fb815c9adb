use dioxus::prelude::*;

use quiz_core::model::QuizEvent;
use quiz_core::scoring::Tier;
use services::{QuestionView, QuizRenderer, ResultsView};

/// What the quiz page currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizScreen {
    Intro,
    Question(QuestionView),
    Results(ResultsView),
}

/// User actions on the quiz page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(usize),
    Next,
    Previous,
    Submit,
    Retry,
}

/// Engine event for an intent. `Start` creates the engine and has none.
#[must_use]
pub fn intent_event(intent: QuizIntent) -> Option<QuizEvent> {
    match intent {
        QuizIntent::Start => None,
        QuizIntent::Select(choice) => Some(QuizEvent::AnswerSelected(choice)),
        QuizIntent::Next => Some(QuizEvent::NextRequested),
        QuizIntent::Previous => Some(QuizEvent::PreviousRequested),
        QuizIntent::Submit => Some(QuizEvent::SubmitRequested),
        QuizIntent::Retry => Some(QuizEvent::ResetRequested),
    }
}

#[must_use]
pub fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "#22c55e",
        Tier::Good => "#f59e0b",
        Tier::KeepLearning => "#ef4444",
    }
}

/// Renders by writing the page signals; Dioxus redraws whatever reads them.
pub struct SignalRenderer {
    screen: Signal<QuizScreen>,
    countdown: Signal<String>,
}

impl SignalRenderer {
    #[must_use]
    pub fn new(screen: Signal<QuizScreen>, countdown: Signal<String>) -> Self {
        Self { screen, countdown }
    }
}

impl QuizRenderer for SignalRenderer {
    fn show_question(&mut self, view: &QuestionView) {
        self.screen.set(QuizScreen::Question(view.clone()));
    }

    fn show_countdown(&mut self, label: &str) {
        self.countdown.set(label.to_string());
    }

    fn show_results(&mut self, view: &ResultsView) {
        self.screen.set(QuizScreen::Results(view.clone()));
    }
}
