use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{GlossaryView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
        #[route("/glossary", GlossaryView)] Glossary {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "AI Bias Detective" }
            ul {
                li { Link { to: Route::Quiz {}, "Mission" } }
                li { Link { to: Route::Glossary {}, "Bias Glossary" } }
            }
        }
    }
}
