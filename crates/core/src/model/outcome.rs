use chrono::{DateTime, Utc};

use crate::scoring::{Tier, format_percentage};

/// Why a quiz attempt was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReason {
    /// The user pressed Submit, or Next on the last question.
    Requested,
    /// The countdown reached zero.
    TimeExpired,
}

/// Result of a submitted quiz attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
    pub answered: u32,
    pub percentage: f64,
    pub tier: Tier,
    pub reason: SubmitReason,
    pub started_at: DateTime<Utc>,
    pub submitted_at: DateTime<Utc>,
}

impl QuizOutcome {
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage)
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }

    /// Whole seconds between start and submission, never negative.
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        let secs = (self.submitted_at - self.started_at).num_seconds().max(0);
        u32::try_from(secs).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.reason == SubmitReason::TimeExpired
    }
}
