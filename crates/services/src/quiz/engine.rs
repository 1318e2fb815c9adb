use std::fmt;
use std::sync::Arc;

use quiz_core::model::{QuestionSet, QuizEvent, QuizSettings, QuizState, Transition};

use crate::Clock;
use crate::error::QuizEngineError;
use super::collaborators::{QuizRenderer, QuizTimer};
use super::view::{QuestionView, ResultsView};

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Owns one quiz session and drives its render surface and countdown.
///
/// Every operation funnels through [`QuizEngine::dispatch`]; the pure
/// transition lives in `QuizState::apply` and this type turns its result into
/// render and timer requests.
pub struct QuizEngine {
    questions: Arc<QuestionSet>,
    settings: QuizSettings,
    clock: Clock,
    state: Option<QuizState>,
    renderer: Box<dyn QuizRenderer>,
    timer: Box<dyn QuizTimer>,
}

impl QuizEngine {
    #[must_use]
    pub fn new(
        questions: Arc<QuestionSet>,
        settings: QuizSettings,
        renderer: Box<dyn QuizRenderer>,
        timer: Box<dyn QuizTimer>,
    ) -> Self {
        Self {
            questions,
            settings,
            clock: Clock::default_clock(),
            state: None,
            renderer,
            timer,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn state(&self) -> Option<&QuizState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.state.as_ref().is_some_and(QuizState::is_in_progress)
    }

    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView> {
        self.state
            .as_ref()
            .filter(|state| state.is_in_progress())
            .map(QuestionView::from_state)
    }

    #[must_use]
    pub fn results_view(&self) -> Option<ResultsView> {
        self.state
            .as_ref()
            .and_then(QuizState::outcome)
            .map(ResultsView::from_outcome)
    }

    /// Create attempt 1, start the countdown and draw the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizEngineError::AlreadyStarted` if a session exists; use `reset` instead.
    pub fn start(&mut self) -> Result<(), QuizEngineError> {
        if self.state.is_some() {
            return Err(QuizEngineError::AlreadyStarted);
        }

        let state = QuizState::start(Arc::clone(&self.questions), &self.settings, self.clock.now());
        tracing::info!(
            questions = state.total(),
            duration_secs = self.settings.duration_secs(),
            "quiz started"
        );
        let attempt = state.attempt();
        self.state = Some(state);
        self.restart_countdown(attempt);
        self.render_question();
        self.render_countdown();
        Ok(())
    }

    /// Apply one event and perform the resulting render/timer requests.
    ///
    /// `ResetRequested` before `start` behaves like `start`.
    ///
    /// # Errors
    ///
    /// Returns `QuizEngineError::NotStarted` before `start`, or
    /// `QuizEngineError::Quiz` when the event violates the current phase.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Transition, QuizEngineError> {
        let now = self.clock.now();
        let Some(state) = self.state.as_mut() else {
            if event == QuizEvent::ResetRequested {
                self.start()?;
                return Ok(Transition::Restarted { attempt: 1 });
            }
            return Err(QuizEngineError::NotStarted);
        };

        let transition = state.apply(event, now).map_err(|err| {
            tracing::debug!(?event, %err, "quiz event rejected");
            QuizEngineError::from(err)
        })?;
        self.perform(event, &transition);
        Ok(transition)
    }

    /// # Errors
    ///
    /// See [`QuizEngine::dispatch`].
    pub fn select_answer(&mut self, choice: usize) -> Result<Transition, QuizEngineError> {
        self.dispatch(QuizEvent::AnswerSelected(choice))
    }

    /// # Errors
    ///
    /// See [`QuizEngine::dispatch`].
    pub fn next(&mut self) -> Result<Transition, QuizEngineError> {
        self.dispatch(QuizEvent::NextRequested)
    }

    /// # Errors
    ///
    /// See [`QuizEngine::dispatch`].
    pub fn previous(&mut self) -> Result<Transition, QuizEngineError> {
        self.dispatch(QuizEvent::PreviousRequested)
    }

    /// One elapsed second for the current attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizEngineError::NotStarted` before `start`.
    pub fn tick(&mut self) -> Result<Transition, QuizEngineError> {
        let attempt = self
            .state
            .as_ref()
            .map(QuizState::attempt)
            .ok_or(QuizEngineError::NotStarted)?;
        self.dispatch(QuizEvent::Tick { attempt })
    }

    /// # Errors
    ///
    /// See [`QuizEngine::dispatch`].
    pub fn submit(&mut self) -> Result<Transition, QuizEngineError> {
        self.dispatch(QuizEvent::SubmitRequested)
    }

    /// # Errors
    ///
    /// See [`QuizEngine::dispatch`].
    pub fn reset(&mut self) -> Result<Transition, QuizEngineError> {
        self.dispatch(QuizEvent::ResetRequested)
    }

    fn perform(&mut self, event: QuizEvent, transition: &Transition) {
        match transition {
            Transition::AnswerRecorded { .. } | Transition::Moved { .. } => self.render_question(),
            Transition::Ticked { .. } => self.render_countdown(),
            Transition::Submitted(outcome) => {
                self.timer.cancel();
                if matches!(event, QuizEvent::Tick { .. }) {
                    self.render_countdown();
                }
                tracing::info!(
                    score = outcome.score,
                    total = outcome.total,
                    percentage = outcome.percentage,
                    reason = ?outcome.reason,
                    "quiz submitted"
                );
                self.renderer.show_results(&ResultsView::from_outcome(outcome));
            }
            Transition::Restarted { attempt } => {
                tracing::info!(attempt, "quiz restarted");
                self.restart_countdown(*attempt);
                self.render_question();
                self.render_countdown();
            }
            Transition::Unchanged => {}
        }
    }

    fn restart_countdown(&mut self, attempt: u32) {
        self.timer.cancel();
        self.timer.start(attempt);
    }

    fn render_question(&mut self) {
        if let Some(state) = self.state.as_ref() {
            self.renderer.show_question(&QuestionView::from_state(state));
        }
    }

    fn render_countdown(&mut self) {
        if let Some(state) = self.state.as_ref() {
            self.renderer.show_countdown(&state.countdown_label());
        }
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("questions_len", &self.questions.len())
            .field("settings", &self.settings)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
