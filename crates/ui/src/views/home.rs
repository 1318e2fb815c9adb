use dioxus::prelude::*;
use dioxus_router::Link;

use quiz_core::time::format_countdown;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let total = ctx.questions().len();
    let duration = format_countdown(ctx.settings().duration_secs());
    let source = ctx.source_label().to_string();

    rsx! {
        div { class: "page",
            h2 { "Test your knowledge" }
            p { "{total} questions · {duration} on the clock" }
            p { class: "muted", "Questions: {source}" }
            Link { class: "btn btn-primary", to: Route::Quiz {}, "Take the Quiz" }
        }
    }
}
