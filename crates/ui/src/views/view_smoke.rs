use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::model::{QuestionDraft, QuestionSet, QuizOutcome, QuizSettings, SubmitReason};
use quiz_core::scoring::Tier;
use quiz_core::time::fixed_now;
use services::ResultsView;

use super::quiz::ResultsPanel;
use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with};
use crate::vm::{QuizIntent, QuizScreen};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_quiz_summary() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("5 questions"), "missing count in {html}");
    assert!(html.contains("15:00"), "missing duration in {html}");
    assert!(html.contains("Take the Quiz"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_on_intro() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
    assert!(!html.contains("quiz-timer"), "timer shown before start in {html}");
    assert_eq!(harness.screen(), QuizScreen::Intro);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_start_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    harness.send(QuizIntent::Start);

    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing counter in {html}");
    assert!(html.contains("15:00"), "missing countdown in {html}");
    assert!(
        html.contains("What is Machine Learning primarily concerned with?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("width: 20%"), "missing progress in {html}");
    assert!(html.contains("Next"), "missing next label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_selection_survives_navigation() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    harness.send(QuizIntent::Start);
    harness.send(QuizIntent::Select(2));
    harness.send(QuizIntent::Next);
    harness.send(QuizIntent::Previous);

    let QuizScreen::Question(view) = harness.screen() else {
        panic!("expected question screen");
    };
    assert_eq!(view.index, 0);
    assert_eq!(view.selected, Some(2));
    let html = harness.render();
    assert!(html.contains("quiz-option--selected"), "missing highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_full_attempt_then_retry() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    harness.send(QuizIntent::Start);
    for choice in [1, 0, 1, 1, 1] {
        harness.send(QuizIntent::Select(choice));
        harness.send(QuizIntent::Next);
    }

    let QuizScreen::Results(view) = harness.screen() else {
        panic!("expected results screen");
    };
    assert_eq!(view.score, 4);
    assert_eq!(view.tier, Tier::Excellent);
    let html = harness.render();
    assert!(html.contains("80%"), "missing percentage in {html}");
    assert!(
        html.contains("Excellent! You have a great understanding!"),
        "missing message in {html}"
    );
    assert!(html.contains("#22c55e"), "missing tier color in {html}");
    assert!(html.contains("Retry Quiz"), "missing retry in {html}");

    harness.send(QuizIntent::Retry);
    let QuizScreen::Question(view) = harness.screen() else {
        panic!("expected question screen after retry");
    };
    assert_eq!(view.index, 0);
    assert_eq!(view.selected, None);
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing counter in {html}");
    assert!(html.contains("15:00"), "countdown not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_single_question_submits_from_first() {
    let questions = QuestionSet::from_drafts(vec![QuestionDraft::new(
        "Capital of France?",
        ["Berlin", "Paris"],
        1,
    )])
    .unwrap();
    let settings = QuizSettings::with_duration(90).unwrap();
    let mut harness = setup_view_harness_with(ViewKind::Quiz, questions, settings);
    harness.rebuild();
    harness.send(QuizIntent::Start);

    let html = harness.render();
    assert!(html.contains("01:30"), "missing countdown in {html}");
    assert!(html.contains("Submit"), "missing submit label in {html}");

    harness.send(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("0%"), "missing percentage in {html}");
    assert!(
        html.contains("Keep learning and try again!"),
        "missing message in {html}"
    );
}

// Paused tokio time: the runtime jumps to the next timer whenever the test is idle.
#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_countdown_expires_and_retry_restarts_one_countdown() {
    let settings = QuizSettings::with_duration(2).unwrap();
    let mut harness = setup_view_harness_with(ViewKind::Quiz, QuestionSet::reference(), settings);
    harness.rebuild();
    harness.send(QuizIntent::Start);
    harness.send(QuizIntent::Select(1));
    let html = harness.render();
    assert!(html.contains("00:02"), "missing full countdown in {html}");

    harness.run_for(Duration::from_millis(1_200)).await;
    assert!(matches!(harness.screen(), QuizScreen::Question(_)));
    let html = harness.render();
    assert!(html.contains("00:01"), "countdown did not tick in {html}");

    harness.run_for(Duration::from_millis(1_300)).await;
    let QuizScreen::Results(expired) = harness.screen() else {
        panic!("expected expiry to show results");
    };
    assert!(expired.timed_out);
    assert_eq!(expired.score, 1);
    assert_eq!(expired.answered, 1);
    let html = harness.render();
    assert!(html.contains("quiz-timed-out"), "missing timeout note in {html}");

    // The expired countdown stays stopped.
    harness.run_for(Duration::from_secs(3)).await;
    assert_eq!(harness.screen(), QuizScreen::Results(expired));

    harness.send(QuizIntent::Retry);
    let html = harness.render();
    assert!(html.contains("00:02"), "retry did not reset countdown in {html}");

    harness.run_for(Duration::from_millis(1_200)).await;
    let QuizScreen::Question(view) = harness.screen() else {
        panic!("retry attempt ended early");
    };
    assert_eq!(view.selected, None);
    let html = harness.render();
    assert!(html.contains("00:01"), "expected one tick after retry in {html}");
    assert!(!html.contains("00:00"), "two countdowns ran after retry in {html}");

    harness.run_for(Duration::from_millis(1_000)).await;
    let QuizScreen::Results(view) = harness.screen() else {
        panic!("expected the retry attempt to expire");
    };
    assert!(view.timed_out);
    assert_eq!(view.answered, 0);
}

#[component]
fn TimedOutResults() -> Element {
    let now = fixed_now();
    let outcome = QuizOutcome {
        score: 3,
        total: 5,
        answered: 4,
        percentage: 60.0,
        tier: Tier::Good,
        reason: SubmitReason::TimeExpired,
        started_at: now,
        submitted_at: now + chrono::Duration::seconds(900),
    };
    rsx! {
        ResultsPanel { view: ResultsView::from_outcome(&outcome), on_intent: move |_| {} }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_panel_smoke_marks_timeout() {
    let mut dom = VirtualDom::new(TimedOutResults);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("quiz-timed-out"), "missing timeout note in {html}");
    assert!(html.contains("60%"), "missing percentage in {html}");
    assert!(html.contains("Good job! Keep practicing!"), "missing message in {html}");
    assert!(html.contains("#f59e0b"), "missing tier color in {html}");
    assert!(html.contains("15:00"), "missing elapsed time in {html}");
}
