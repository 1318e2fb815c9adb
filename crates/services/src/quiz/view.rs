use quiz_core::model::{QuizOutcome, QuizState, SubmitReason, choice_letter};
use quiz_core::scoring::Tier;
use quiz_core::time::format_countdown;

/// One selectable option of the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

/// Everything a surface needs to draw the current question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub choices: Vec<ChoiceView>,
    pub selected: Option<usize>,
    pub is_first: bool,
    pub is_last: bool,
}

impl QuestionView {
    #[must_use]
    pub fn from_state(state: &QuizState) -> Self {
        let question = state.current_question();
        let selected = state.selected_choice();
        let choices = question
            .choices()
            .iter()
            .enumerate()
            .map(|(index, text)| ChoiceView {
                index,
                letter: choice_letter(index),
                text: text.clone(),
                selected: selected == Some(index),
            })
            .collect();

        Self {
            index: state.current_index(),
            total: state.total(),
            prompt: question.prompt().to_string(),
            choices,
            selected,
            is_first: state.is_first(),
            is_last: state.is_last(),
        }
    }

    /// 1-based position for "Question i of N".
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.is_first
    }

    /// The forward control doubles as Submit on the last question.
    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.is_last { "Submit" } else { "Next" }
    }

    /// Width of the progress bar, counting the current question as reached.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 * 100.0 / self.total as f64
    }
}

/// Everything a surface needs to draw the results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub score: u32,
    pub total: u32,
    pub answered: u32,
    pub percentage: f64,
    pub percentage_label: String,
    pub tier: Tier,
    pub message: &'static str,
    pub timed_out: bool,
    pub elapsed_label: String,
}

impl ResultsView {
    #[must_use]
    pub fn from_outcome(outcome: &QuizOutcome) -> Self {
        Self {
            score: outcome.score,
            total: outcome.total,
            answered: outcome.answered,
            percentage: outcome.percentage,
            percentage_label: outcome.percentage_label(),
            tier: outcome.tier,
            message: outcome.message(),
            timed_out: outcome.reason == SubmitReason::TimeExpired,
            elapsed_label: format_countdown(outcome.elapsed_secs()),
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }
}
