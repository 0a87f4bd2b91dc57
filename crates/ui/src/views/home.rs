use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let count = ctx.question_count();
    let order_note = if ctx.shuffles() {
        "Questions appear in a random order."
    } else {
        "Questions appear in a fixed order."
    };

    rsx! {
        div { class: "page home-page",
            h2 { "{ctx.bank_title()}" }
            p { class: "home-count", "{count} questions" }
            p { class: "home-note", "{order_note} You can skip around, check any answer, and finish whenever you like." }
            div { class: "home-actions",
                Link { to: Route::Quiz {}, "Start quiz" }
            }
        }
    }
}
