mod quiz_vm;

pub use quiz_vm::{
    ChoiceVm, CompletionVm, DefinitionVm, IntroVm, QuizHeaderVm, QuizIntent, QuizScreenVm,
    RevealVm, ScenarioVm, apply_intent, map_definitions, map_header, map_intro, map_quiz_screen,
    tier_message,
};
