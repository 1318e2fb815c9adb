use dioxus::prelude::*;

use services::{QuestionView, ResultsView};

use crate::vm::{QuizIntent, tier_color};

#[component]
pub(super) fn QuizIntro(
    total: usize,
    duration_label: String,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "quiz-intro",
            p { class: "quiz-intro__lead",
                "{total} questions, {duration_label} on the clock."
            }
            p { class: "quiz-intro__hint",
                "Pick one answer per question. Unanswered questions count as wrong."
            }
            button {
                class: "quiz-cta",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Quiz"
            }
        }
    }
}

#[component]
pub(super) fn QuestionCard(
    view: QuestionView,
    countdown: String,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let progress = view.progress_percent();
    let number = view.number();
    let total = view.total;
    let next_label = view.next_label();
    let can_go_back = view.can_go_back();

    rsx! {
        div { class: "quiz-card",
            div { class: "quiz-card__header",
                span { class: "quiz-counter", id: "quiz-counter", "Question {number} of {total}" }
                span { class: "quiz-timer", id: "quiz-timer", "{countdown}" }
            }
            div { class: "quiz-progress",
                div { class: "quiz-progress__fill", id: "quiz-progress", style: "width: {progress}%" }
            }
            h3 { class: "quiz-prompt", id: "quiz-prompt", "{view.prompt}" }
            div { class: "quiz-options",
                for choice in view.choices.iter().cloned() {
                    OptionButton {
                        key: "{choice.index}",
                        index: choice.index,
                        letter: choice.letter,
                        text: choice.text,
                        selected: choice.selected,
                        on_intent,
                    }
                }
            }
            div { class: "quiz-nav",
                button {
                    class: "quiz-nav__btn quiz-nav__btn--secondary",
                    id: "quiz-prev",
                    r#type: "button",
                    disabled: !can_go_back,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "Previous"
                }
                button {
                    class: "quiz-nav__btn",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    index: usize,
    letter: char,
    text: String,
    selected: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    rsx! {
        button {
            class,
            id: "quiz-option-{index}",
            r#type: "button",
            onclick: move |_| on_intent.call(QuizIntent::Select(index)),
            span { class: "quiz-option__letter", "{letter}" }
            span { class: "quiz-option__text", "{text}" }
        }
    }
}

#[component]
pub(crate) fn ResultsPanel(view: ResultsView, on_intent: EventHandler<QuizIntent>) -> Element {
    let color = tier_color(view.tier);
    let score_label = view.score_label();

    rsx! {
        div { class: "quiz-results", id: "quiz-results",
            h3 { class: "quiz-results__title", "Quiz Complete" }
            if view.timed_out {
                p { class: "quiz-results__note", id: "quiz-timed-out", "Time's up! Your answers were submitted." }
            }
            div { class: "quiz-results__score", id: "quiz-score", "{score_label}" }
            div { class: "quiz-results__percentage", id: "quiz-percentage", "{view.percentage_label}" }
            p {
                class: "quiz-results__message",
                id: "quiz-message",
                style: "color: {color}",
                "{view.message}"
            }
            p { class: "quiz-results__meta",
                "Answered {view.answered} of {view.total} in {view.elapsed_label}"
            }
            button {
                class: "quiz-cta",
                id: "quiz-retry",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Retry),
                "Retry Quiz"
            }
        }
    }
}
