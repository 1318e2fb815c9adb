use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::outcome::{QuizOutcome, SubmitReason};
use crate::model::question::Question;
use crate::model::question_set::QuestionSet;
use crate::model::settings::QuizSettings;
use crate::scoring::{self, Tier};
use crate::time::format_countdown;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Caller contract violations. State is left untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz is not in progress")]
    NotInProgress,

    #[error("choice {choice} is out of range for {len} choices")]
    ChoiceOutOfRange { choice: usize, len: usize },
}

//
// ─── PHASE / EVENTS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Submitted,
}

/// Input to the quiz state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    AnswerSelected(usize),
    NextRequested,
    PreviousRequested,
    /// One elapsed second of the countdown started for `attempt`.
    Tick { attempt: u32 },
    SubmitRequested,
    ResetRequested,
}

/// What an event changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    AnswerRecorded {
        question: usize,
        choice: usize,
        previous: Option<usize>,
    },
    Moved {
        from: usize,
        to: usize,
    },
    Ticked {
        seconds_remaining: u32,
    },
    Submitted(QuizOutcome),
    Restarted {
        attempt: u32,
    },
    Unchanged,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// State of one timed multiple-choice session.
///
/// Answers persist across navigation; the score only exists once the attempt
/// has been submitted.
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Arc<QuestionSet>,
    duration_secs: u32,
    attempt: u32,
    current: usize,
    answers: BTreeMap<usize, usize>,
    seconds_remaining: u32,
    phase: QuizPhase,
    started_at: DateTime<Utc>,
    outcome: Option<QuizOutcome>,
}

impl QuizState {
    /// Begin attempt 1 on the first question with the full countdown.
    ///
    /// `now` should come from the services layer clock.
    #[must_use]
    pub fn start(questions: Arc<QuestionSet>, settings: &QuizSettings, now: DateTime<Utc>) -> Self {
        let duration_secs = settings.duration_secs();
        Self {
            questions,
            duration_secs,
            attempt: 1,
            current: 0,
            answers: BTreeMap::new(),
            seconds_remaining: duration_secs,
            phase: QuizPhase::InProgress,
            started_at: now,
            outcome: None,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Increases by one on every reset; ticks carry it to detect stale countdowns.
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase == QuizPhase::InProgress
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// # Panics
    ///
    /// Never in practice: `current` always addresses a question of the non-empty set.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions.questions()[self.current]
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    #[must_use]
    pub fn selected_choice(&self) -> Option<usize> {
        self.answer_for(self.current)
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn countdown_label(&self) -> String {
        format_countdown(self.seconds_remaining)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Present only once the phase is `Submitted`.
    #[must_use]
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Single entry point for every event.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the event is not allowed in the current phase or
    /// names a choice the current question does not have.
    pub fn apply(&mut self, event: QuizEvent, now: DateTime<Utc>) -> Result<Transition, QuizError> {
        match event {
            QuizEvent::AnswerSelected(choice) => self.select_answer(choice),
            QuizEvent::NextRequested => self.next(now),
            QuizEvent::PreviousRequested => self.previous(),
            QuizEvent::Tick { attempt } => Ok(self.tick(attempt, now)),
            QuizEvent::SubmitRequested => Ok(self.submit(SubmitReason::Requested, now)),
            QuizEvent::ResetRequested => Ok(self.reset(now)),
        }
    }

    /// Record `choice` for the current question, replacing any earlier pick.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` after submission and
    /// `QuizError::ChoiceOutOfRange` for an index the question does not have.
    pub fn select_answer(&mut self, choice: usize) -> Result<Transition, QuizError> {
        self.ensure_in_progress()?;
        let len = self.current_question().choice_count();
        if choice >= len {
            return Err(QuizError::ChoiceOutOfRange { choice, len });
        }

        let previous = self.answers.insert(self.current, choice);
        Ok(Transition::AnswerRecorded {
            question: self.current,
            choice,
            previous,
        })
    }

    /// Advance one question; on the last question this submits.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` after submission.
    pub fn next(&mut self, now: DateTime<Utc>) -> Result<Transition, QuizError> {
        self.ensure_in_progress()?;
        if self.is_last() {
            return Ok(self.submit(SubmitReason::Requested, now));
        }

        let from = self.current;
        self.current += 1;
        Ok(Transition::Moved {
            from,
            to: self.current,
        })
    }

    /// Step back one question. No-op on the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` after submission.
    pub fn previous(&mut self) -> Result<Transition, QuizError> {
        self.ensure_in_progress()?;
        if self.is_first() {
            return Ok(Transition::Unchanged);
        }

        let from = self.current;
        self.current -= 1;
        Ok(Transition::Moved {
            from,
            to: self.current,
        })
    }

    /// Count down one second, submitting when the countdown hits zero.
    ///
    /// Ticks for another attempt or after submission are ignored.
    pub fn tick(&mut self, attempt: u32, now: DateTime<Utc>) -> Transition {
        if !self.is_in_progress() || attempt != self.attempt {
            return Transition::Unchanged;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            return self.submit(SubmitReason::TimeExpired, now);
        }
        Transition::Ticked {
            seconds_remaining: self.seconds_remaining,
        }
    }

    /// Score the attempt and move to `Submitted`. Repeat calls are no-ops.
    pub fn submit(&mut self, reason: SubmitReason, now: DateTime<Utc>) -> Transition {
        if !self.is_in_progress() {
            return Transition::Unchanged;
        }

        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        let score = scoring::score(&self.questions, &self.answers);
        let percentage = scoring::percentage(score, total);
        let outcome = QuizOutcome {
            score,
            total,
            answered: u32::try_from(self.answers.len()).unwrap_or(u32::MAX),
            percentage,
            tier: Tier::from_percentage(percentage),
            reason,
            started_at: self.started_at,
            submitted_at: now,
        };

        self.phase = QuizPhase::Submitted;
        self.outcome = Some(outcome.clone());
        Transition::Submitted(outcome)
    }

    /// Start a fresh attempt over the same questions. Valid in any phase.
    pub fn reset(&mut self, now: DateTime<Utc>) -> Transition {
        let attempt = self.attempt.wrapping_add(1);
        let settings_duration = self.duration_secs;
        *self = Self {
            questions: Arc::clone(&self.questions),
            duration_secs: settings_duration,
            attempt,
            current: 0,
            answers: BTreeMap::new(),
            seconds_remaining: settings_duration,
            phase: QuizPhase::InProgress,
            started_at: now,
            outcome: None,
        };
        Transition::Restarted { attempt }
    }

    fn ensure_in_progress(&self) -> Result<(), QuizError> {
        if self.is_in_progress() {
            Ok(())
        } else {
            Err(QuizError::NotInProgress)
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
