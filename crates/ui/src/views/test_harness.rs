use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::Catalog;
use services::{QuizController, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::{GlossaryView, QuizView};
use crate::vm::{QuizIntent, apply_intent};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
    quiz_settings: QuizSettings,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn quiz_settings(&self) -> QuizSettings {
        self.quiz_settings
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Glossary,
}

/// Scripted gestures replayed on the controller before the first render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Start,
    Answer { correct: bool },
    Advance,
}

impl Step {
    fn apply(self, quiz: &mut QuizController) {
        let intent = match self {
            Self::Start => QuizIntent::Start,
            Self::Advance => QuizIntent::Advance,
            Self::Answer { correct } => {
                let scenario = quiz.current_scenario().expect("scenario to answer");
                let choice = scenario
                    .choices()
                    .iter()
                    .find(|choice| scenario.is_correct(choice) == correct)
                    .expect("matching choice")
                    .clone();
                apply_intent(quiz, QuizIntent::Select(choice));
                QuizIntent::Submit
            }
        };
        assert!(apply_intent(quiz, intent).is_applied(), "{self:?} was ignored");
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    steps: Vec<Step>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let quiz = use_hook(|| {
        let mut controller = ctx
            .new_controller()
            .expect("test settings fit the catalog")
            .with_seed(7);
        for step in &props.steps {
            step.apply(&mut controller);
        }
        Signal::new(controller)
    });
    use_context_provider(|| quiz);
    use_context_provider(|| props.view);
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
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Glossary => rsx! { GlossaryView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
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

pub fn setup_view_harness(view: ViewKind, steps: Vec<Step>) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: Arc::new(Catalog::builtin().expect("builtin catalog")),
        quiz_settings: QuizSettings::default(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, steps });

    let mut harness = ViewHarness { dom };
    harness.rebuild();
    harness
}
