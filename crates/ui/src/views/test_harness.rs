use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{QuestionSet, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::HomeView;
use crate::views::quiz::QuizTestHandles;
use crate::views::QuizView;
use crate::vm::{QuizIntent, QuizScreen};

struct TestApp {
    questions: Arc<QuestionSet>,
    settings: QuizSettings,
}

impl UiApp for TestApp {
    fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn source_label(&self) -> String {
        "built-in questions".to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send an intent through the quiz page's own callback and settle the DOM.
    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn screen(&self) -> QuizScreen {
        let screen = self.handles.screen();
        self.dom.in_runtime(|| screen.peek().clone())
    }

    /// Let spawned tasks run for `span` of tokio time, settling the DOM after each wakeup.
    pub async fn run_for(&mut self, span: Duration) {
        let deadline = tokio::time::Instant::now() + span;
        for _ in 0..1_000 {
            let now = tokio::time::Instant::now();
            if now >= deadline {
                break;
            }
            let _ = tokio::time::timeout(deadline - now, self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, QuestionSet::reference(), QuizSettings::default())
}

pub fn setup_view_harness_with(
    view: ViewKind,
    questions: QuestionSet,
    settings: QuizSettings,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        questions: Arc::new(questions),
        settings,
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
