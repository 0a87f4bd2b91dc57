use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.bank_title().to_string();

    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "topbar__title", "{title}" }
                nav { class: "topbar__nav",
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::Quiz {}, "Quiz" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
