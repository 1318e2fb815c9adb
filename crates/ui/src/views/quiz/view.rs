use std::sync::Arc;

use dioxus::prelude::*;

use quiz_core::model::MAX_CHOICES;
use quiz_core::time::format_countdown;
use services::QuizEngine;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizScreen, SignalRenderer, SignalTicker, intent_event};
use super::components::{QuestionCard, QuizIntro, ResultsPanel};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Letters pick the matching option (`a` is the first); digits 1-9 do too.
fn choice_for_key(value: &str) -> Option<usize> {
    let mut chars = value.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let index = match ch {
        'a'..='z' => usize::from(ch as u8 - b'a'),
        'A'..='Z' => usize::from(ch as u8 - b'A'),
        '1'..='9' => usize::from(ch as u8 - b'1'),
        _ => return None,
    };
    (index < MAX_CHOICES).then_some(index)
}

fn intent_for_key(key: &Key) -> Option<QuizIntent> {
    match key {
        Key::ArrowRight | Key::Enter => Some(QuizIntent::Next),
        Key::ArrowLeft => Some(QuizIntent::Previous),
        Key::Character(value) => choice_for_key(value).map(QuizIntent::Select),
        _ => None,
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings();
    let total = ctx.questions().len();

    let screen = use_signal(|| QuizScreen::Intro);
    let countdown = use_signal(|| format_countdown(settings.duration_secs()));
    let engine = use_signal(|| None::<QuizEngine>);

    let dispatch = {
        let questions = ctx.questions();
        use_callback(move |intent: QuizIntent| {
            let mut engine = engine;

            let Some(event) = intent_event(intent) else {
                if engine.peek().is_some() {
                    return;
                }
                let renderer = SignalRenderer::new(screen, countdown);
                let ticker = SignalTicker::new(engine);
                engine.set(Some(QuizEngine::new(
                    Arc::clone(&questions),
                    settings,
                    Box::new(renderer),
                    Box::new(ticker),
                )));
                if let Some(quiz) = engine.write().as_mut() {
                    if let Err(err) = quiz.start() {
                        tracing::warn!(%err, "quiz failed to start");
                    }
                }
                return;
            };

            let mut guard = engine.write();
            let Some(quiz) = guard.as_mut() else {
                tracing::debug!(?intent, "quiz intent before start");
                return;
            };
            if let Err(err) = quiz.dispatch(event) {
                tracing::debug!(?intent, %err, "quiz intent ignored");
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, screen);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if !matches!(*screen.read(), QuizScreen::Question(_)) {
            return;
        }
        if let Some(intent) = intent_for_key(&evt.data.key()) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    });

    let current = screen.read().clone();
    let duration_label = format_countdown(settings.duration_secs());

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            h2 { class: "quiz-title", "Knowledge Check" }
            match current {
                QuizScreen::Intro => rsx! {
                    QuizIntro { total, duration_label, on_intent: dispatch }
                },
                QuizScreen::Question(view) => rsx! {
                    QuestionCard { view, countdown: countdown(), on_intent: dispatch }
                },
                QuizScreen::Results(view) => rsx! {
                    ResultsPanel { view, on_intent: dispatch }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    screen: Rc<RefCell<Option<Signal<QuizScreen>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, screen: Signal<QuizScreen>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.screen.borrow_mut() = Some(screen);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn screen(&self) -> Signal<QuizScreen> {
        (*self.screen.borrow()).expect("quiz screen registered")
    }
}
