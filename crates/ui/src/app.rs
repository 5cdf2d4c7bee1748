use dioxus::prelude::*;
use dioxus_router::Router;
use services::QuizController;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_hook(|| {
        ctx.new_controller()
            .map(|controller| Signal::new(controller))
            .map_err(|err| err.to_string())
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "AI Bias Detective" }

        div { class: "app-root",
            match quiz {
                Ok(quiz) => rsx! {
                    ErrorBoundary {
                        handle_error: |errors: ErrorContext| rsx! {
                            div { class: "fatal",
                                h1 { "Something went wrong" }
                                pre { "{errors:?}" }
                            }
                        },
                        QuizProvider { quiz }
                    }
                },
                Err(message) => rsx! {
                    div { class: "fatal",
                        h1 { "Cannot start the quiz" }
                        pre { "{message}" }
                    }
                },
            }
        }
    }
}

/// Shares one controller with every route so a session survives navigation.
#[component]
fn QuizProvider(quiz: Signal<QuizController>) -> Element {
    use_context_provider(|| quiz);
    rsx! { Router::<Route> {} }
}
