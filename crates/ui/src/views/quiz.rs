use dioxus::prelude::*;
use quiz_core::builtin::REFERENCE;
use services::QuizController;

use crate::vm::{
    ChoiceVm, CompletionVm, DefinitionVm, IntroVm, QuizHeaderVm, QuizIntent, QuizScreenVm,
    RevealVm, ScenarioVm, apply_intent, map_quiz_screen,
};

#[component]
pub fn QuizView() -> Element {
    let mut quiz = use_context::<Signal<QuizController>>();
    let screen = map_quiz_screen(&quiz.read());
    let on_intent = move |intent: QuizIntent| {
        apply_intent(&mut quiz.write(), intent);
    };

    rsx! {
        section { class: "quiz",
            match screen {
                QuizScreenVm::Intro(intro) => rsx! {
                    IntroPanel { intro, on_intent }
                },
                QuizScreenVm::Question { header, scenario, reveal } => rsx! {
                    QuestionPanel { header, scenario, reveal, on_intent }
                },
                QuizScreenVm::Completed(completion) => rsx! {
                    CompletionPanel { completion, on_intent }
                },
            }
        }
    }
}

#[component]
fn IntroPanel(intro: IntroVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-intro",
            h2 { "AI Bias Detective" }
            p { class: "quiz-intro__lead",
                "Spot the bias hiding in everyday AI systems before it reaches real people."
            }
            h3 { "How to Play:" }
            ul { class: "quiz-intro__rules",
                for rule in intro.rules {
                    li { "{rule}" }
                }
            }
            button {
                class: "quiz-cta",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Detective Mission"
            }
        }
    }
}

#[component]
fn QuestionPanel(
    header: QuizHeaderVm,
    scenario: ScenarioVm,
    reveal: Option<RevealVm>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let revealed = reveal.is_some();
    rsx! {
        header { class: "quiz-header",
            span { class: "quiz-header__progress", "{header.progress_label}" }
            span { class: "quiz-header__score", "{header.score_label}" }
        }
        ScenarioPanel { scenario, revealed, on_intent }
        if let Some(reveal) = reveal {
            RevealPanel { reveal, on_intent }
        }
        ReferenceCard {}
    }
}

#[component]
fn ScenarioPanel(
    scenario: ScenarioVm,
    revealed: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let ScenarioVm {
        title,
        body,
        question,
        choices,
        can_submit,
    } = scenario;
    rsx! {
        article { class: "quiz-scenario",
            h2 { "{title}" }
            p { class: "quiz-scenario__body", "{body}" }
            h3 { class: "quiz-scenario__question", "{question}" }
            div { class: "quiz-choices",
                for (index, choice) in choices.into_iter().enumerate() {
                    ChoiceButton { key: "{index}", choice, on_intent }
                }
            }
            if !revealed {
                button {
                    class: "quiz-cta",
                    id: "quiz-submit",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: move |_| on_intent.call(QuizIntent::Submit),
                    "Submit Answer"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if choice.selected {
        "quiz-choice quiz-choice--selected"
    } else {
        "quiz-choice"
    };
    let ChoiceVm { text, locked, .. } = choice;
    let label = text.clone();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(text.clone())),
            "{label}"
        }
    }
}

#[component]
fn RevealPanel(reveal: RevealVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let RevealVm {
        correct,
        verdict_label,
        correct_answer,
        bias_category,
        explanation,
        definitions,
        next_label,
    } = reveal;
    let verdict_class = if correct {
        "quiz-verdict quiz-verdict--correct"
    } else {
        "quiz-verdict quiz-verdict--incorrect"
    };
    rsx! {
        div { class: "quiz-reveal",
            h3 { class: "{verdict_class}", "{verdict_label}" }
            p {
                strong { "Correct Answer: " }
                "{correct_answer}"
            }
            p {
                strong { "Bias Category: " }
                "{bias_category}"
            }
            p { class: "quiz-reveal__explanation", "{explanation}" }
            h4 { "Bias Type Definitions:" }
            DefinitionList { definitions }
            button {
                class: "quiz-cta",
                id: "quiz-next",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Advance),
                "{next_label}"
            }
        }
    }
}

#[component]
pub(crate) fn DefinitionList(definitions: Vec<DefinitionVm>) -> Element {
    rsx! {
        dl { class: "bias-definitions",
            for definition in definitions {
                div {
                    key: "{definition.name}",
                    class: if definition.highlighted {
                        "bias-definition bias-definition--highlighted"
                    } else {
                        "bias-definition"
                    },
                    dt { "{definition.name}" }
                    dd { "{definition.definition}" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ReferenceCard() -> Element {
    rsx! {
        footer { class: "reference-card",
            h4 { "Reference" }
            p { "{REFERENCE}" }
        }
    }
}

#[component]
fn CompletionPanel(completion: CompletionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-complete",
            h2 { "Mission Complete!" }
            p { class: "quiz-complete__score", "{completion.score_label}" }
            p { class: "quiz-complete__message", "{completion.message}" }
            div { class: "quiz-complete__actions",
                button {
                    class: "quiz-cta",
                    id: "quiz-replay",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Start),
                    "New Mission"
                }
                button {
                    class: "quiz-cta quiz-cta--secondary",
                    id: "quiz-reset",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Reset),
                    "Back to Start"
                }
            }
        }
    }
}
