use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use tokio::time::MissedTickBehavior;

use quiz_core::model::QuizEvent;
use services::{QuizEngine, QuizTimer};

const TICK: Duration = Duration::from_secs(1);

/// Countdown driven by a Dioxus task; ticks are dispatched straight into the
/// engine signal.
///
/// The task is owned by the component that created it, so it also stops
/// when the quiz page unmounts.
pub struct SignalTicker {
    engine: Signal<Option<QuizEngine>>,
    task: Option<Task>,
}

impl SignalTicker {
    #[must_use]
    pub fn new(engine: Signal<Option<QuizEngine>>) -> Self {
        Self { engine, task: None }
    }
}

impl QuizTimer for SignalTicker {
    fn start(&mut self, attempt: u32) {
        self.cancel();
        let mut engine = self.engine;
        let task = spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut guard = engine.write();
                let Some(quiz) = guard.as_mut() else {
                    break;
                };
                if let Err(err) = quiz.dispatch(QuizEvent::Tick { attempt }) {
                    tracing::warn!(%err, attempt, "countdown tick rejected");
                    break;
                }
                let still_running = quiz
                    .state()
                    .is_some_and(|state| state.is_in_progress() && state.attempt() == attempt);
                if !still_running {
                    break;
                }
            }
        });
        self.task = Some(task);
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}
