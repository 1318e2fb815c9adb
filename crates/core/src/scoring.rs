//! Score, percentage and feedback tier for a submitted quiz.

use std::collections::BTreeMap;

use crate::model::QuestionSet;

/// Percentage at or above which the result is `Tier::Excellent`.
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Percentage at or above which the result is at least `Tier::Good`.
pub const GOOD_THRESHOLD: f64 = 60.0;

//
// ─── TIER ──────────────────────────────────────────────────────────────────────
//

/// Feedback band selected from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `percentage >= 80`.
    Excellent,
    /// `60 <= percentage < 80`.
    Good,
    /// `percentage < 60`.
    KeepLearning,
}

impl Tier {
    /// Select the tier for an unrounded percentage.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCELLENT_THRESHOLD {
            Tier::Excellent
        } else if percentage >= GOOD_THRESHOLD {
            Tier::Good
        } else {
            Tier::KeepLearning
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent! You have a great understanding!",
            Tier::Good => "Good job! Keep practicing!",
            Tier::KeepLearning => "Keep learning and try again!",
        }
    }

    /// Stable lowercase key, handy for CSS modifiers.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::KeepLearning => "keep-learning",
        }
    }
}

//
// ─── SCORING ───────────────────────────────────────────────────────────────────
//

/// Count questions whose recorded answer equals the correct choice.
///
/// Unanswered questions never match.
#[must_use]
pub fn score(questions: &QuestionSet, answers: &BTreeMap<usize, usize>) -> u32 {
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(index)
                .is_some_and(|choice| question.is_correct(*choice))
        })
        .count();
    u32::try_from(correct).unwrap_or(u32::MAX)
}

/// Unrounded `score / total * 100`. A zero total yields `0.0`.
#[must_use]
pub fn percentage(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(score) * 100.0 / f64::from(total)
}

/// Display rule for percentages: one decimal place, half away from zero,
/// with a trailing `.0` dropped (`80%`, `33.3%`, `66.7%`).
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    let rounded = (percentage * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}
