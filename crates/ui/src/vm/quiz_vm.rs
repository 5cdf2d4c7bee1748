use quiz_core::Catalog;
use quiz_core::model::Scenario;
use services::{QuizController, QuizPhase, QuizProgress, Tier, Transition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroVm {
    pub rules: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeaderVm {
    pub progress_label: String,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub text: String,
    pub selected: bool,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioVm {
    pub title: String,
    pub body: String,
    pub question: String,
    pub choices: Vec<ChoiceVm>,
    pub can_submit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionVm {
    pub name: String,
    pub definition: String,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealVm {
    pub correct: bool,
    pub verdict_label: &'static str,
    pub correct_answer: String,
    pub bias_category: String,
    pub explanation: String,
    pub definitions: Vec<DefinitionVm>,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub tier: Tier,
    pub score_label: String,
    pub message: &'static str,
}

/// Everything the quiz page needs for one render, keyed by phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Intro(IntroVm),
    Question {
        header: QuizHeaderVm,
        scenario: ScenarioVm,
        reveal: Option<RevealVm>,
    },
    Completed(CompletionVm),
}

/// A user gesture on the quiz page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(String),
    Submit,
    Advance,
    Reset,
}

/// Route an intent to the matching controller transition.
pub fn apply_intent(quiz: &mut QuizController, intent: QuizIntent) -> Transition {
    match intent {
        QuizIntent::Start => quiz.start(),
        QuizIntent::Select(choice) => quiz.select_choice(choice),
        QuizIntent::Submit => quiz.submit(),
        QuizIntent::Advance => quiz.advance(),
        QuizIntent::Reset => quiz.reset(),
    }
}

#[must_use]
pub fn tier_message(tier: Tier) -> &'static str {
    match tier {
        Tier::Perfect => "Perfect! You're a bias detection expert!",
        Tier::Good => "Great work! You have a good understanding of AI bias.",
        Tier::NeedsImprovement => "Keep learning! Understanding bias is crucial for fair AI.",
    }
}

/// Category definitions in catalog order, with `highlight` marked.
#[must_use]
pub fn map_definitions(catalog: &Catalog, highlight: Option<&str>) -> Vec<DefinitionVm> {
    catalog
        .categories()
        .iter()
        .map(|category| DefinitionVm {
            name: category.name().to_string(),
            definition: category.definition().to_string(),
            highlighted: highlight == Some(category.name()),
        })
        .collect()
}

#[must_use]
pub fn map_intro(total: usize, category_count: usize) -> IntroVm {
    IntroVm {
        rules: vec![
            format!("You'll see {total} random scenarios from different Asian contexts"),
            "Choose the most accurate description of the bias behind each scenario".to_string(),
            format!("See how every answer connects to {category_count} key bias categories"),
            "See how well you can detect bias patterns!".to_string(),
        ],
    }
}

/// Header labels for the scenario screen.
#[must_use]
pub fn map_header(progress: QuizProgress) -> QuizHeaderVm {
    QuizHeaderVm {
        progress_label: format!("Scenario {}/{}", progress.index + 1, progress.total),
        score_label: format!("Score: {}/{}", progress.score, progress.total),
    }
}

fn map_scenario(quiz: &QuizController, scenario: &Scenario) -> ScenarioVm {
    let locked = quiz.phase() != QuizPhase::Playing;
    let selected = quiz.selected_choice();
    ScenarioVm {
        title: scenario.title().to_string(),
        body: scenario.body().to_string(),
        question: scenario.question().to_string(),
        choices: scenario
            .choices()
            .iter()
            .map(|choice| ChoiceVm {
                text: choice.clone(),
                selected: selected == Some(choice.as_str()),
                locked,
            })
            .collect(),
        can_submit: quiz.can_submit(),
    }
}

fn map_reveal(quiz: &QuizController, scenario: &Scenario) -> RevealVm {
    let correct = quiz.last_answer_correct().unwrap_or(false);
    let is_last = quiz.current_index() + 1 >= quiz.total();
    RevealVm {
        correct,
        verdict_label: if correct { "Correct!" } else { "Incorrect" },
        correct_answer: scenario.correct_answer().to_string(),
        bias_category: scenario.bias_category().to_string(),
        explanation: scenario.explanation().to_string(),
        definitions: map_definitions(quiz.catalog(), Some(scenario.bias_category())),
        next_label: if is_last {
            "Complete Mission"
        } else {
            "Next Scenario"
        },
    }
}

#[must_use]
pub fn map_quiz_screen(quiz: &QuizController) -> QuizScreenVm {
    let total = quiz.total();
    let intro = || QuizScreenVm::Intro(map_intro(total, quiz.catalog().categories().len()));

    match quiz.phase() {
        QuizPhase::Idle => intro(),
        QuizPhase::Completed => {
            let tier = quiz
                .tier()
                .unwrap_or_else(|| Tier::for_score(quiz.score(), total));
            QuizScreenVm::Completed(CompletionVm {
                tier,
                score_label: format!("Your Score: {}/{total}", quiz.score()),
                message: tier_message(tier),
            })
        }
        QuizPhase::Playing | QuizPhase::Revealed => {
            let Some(scenario) = quiz.current_scenario() else {
                return intro();
            };
            QuizScreenVm::Question {
                header: map_header(quiz.progress()),
                scenario: map_scenario(quiz, scenario),
                reveal: quiz
                    .is_revealed()
                    .then(|| map_reveal(quiz, scenario)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use services::QuizSettings;

    use super::*;

    fn quiz() -> QuizController {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        QuizController::new(catalog, QuizSettings::default())
            .unwrap()
            .with_seed(5)
    }

    fn answer(quiz: &mut QuizController, correct: bool) {
        let scenario = quiz.current_scenario().unwrap();
        let choice = scenario
            .choices()
            .iter()
            .find(|choice| scenario.is_correct(choice) == correct)
            .unwrap()
            .clone();
        quiz.select_choice(choice);
        quiz.submit();
    }

    #[test]
    fn idle_maps_to_intro_with_default_total() {
        let screen = map_quiz_screen(&quiz());
        let QuizScreenVm::Intro(intro) = screen else {
            panic!("expected intro, got {screen:?}");
        };
        assert_eq!(
            intro.rules[0],
            "You'll see 5 random scenarios from different Asian contexts"
        );
        assert!(intro.rules[2].contains("4 key bias categories"));
    }

    #[test]
    fn playing_maps_header_and_choices() {
        let mut quiz = quiz();
        quiz.start();
        let first = quiz.current_scenario().unwrap().choices()[0].clone();
        quiz.select_choice(first.clone());

        let QuizScreenVm::Question {
            header,
            scenario,
            reveal,
        } = map_quiz_screen(&quiz)
        else {
            panic!("expected question screen");
        };
        assert_eq!(header.progress_label, "Scenario 1/5");
        assert_eq!(header.score_label, "Score: 0/5");
        assert!(scenario.can_submit);
        assert!(reveal.is_none());
        let selected: Vec<_> = scenario.choices.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].text, first);
        assert!(scenario.choices.iter().all(|c| !c.locked));
    }

    #[test]
    fn reveal_highlights_the_scenario_category() {
        let mut quiz = quiz();
        quiz.start();
        answer(&mut quiz, false);
        let category = quiz.current_scenario().unwrap().bias_category().to_string();

        let QuizScreenVm::Question {
            scenario, reveal, ..
        } = map_quiz_screen(&quiz)
        else {
            panic!("expected question screen");
        };
        let reveal = reveal.unwrap();
        assert!(!reveal.correct);
        assert_eq!(reveal.verdict_label, "Incorrect");
        assert_eq!(reveal.bias_category, category);
        assert_eq!(reveal.next_label, "Next Scenario");
        assert!(scenario.choices.iter().all(|c| c.locked));
        assert!(!scenario.can_submit);

        let highlighted: Vec<_> = reveal
            .definitions
            .iter()
            .filter(|d| d.highlighted)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(highlighted, vec![category.as_str()]);
        assert_eq!(reveal.definitions.len(), 4);
    }

    #[test]
    fn last_reveal_offers_completion() {
        let mut quiz = quiz();
        quiz.start();
        for _ in 0..4 {
            answer(&mut quiz, true);
            quiz.advance();
        }
        answer(&mut quiz, true);
        let QuizScreenVm::Question { reveal, header, .. } = map_quiz_screen(&quiz) else {
            panic!("expected question screen");
        };
        assert_eq!(header.progress_label, "Scenario 5/5");
        assert_eq!(header.score_label, "Score: 5/5");
        let reveal = reveal.unwrap();
        assert_eq!(reveal.verdict_label, "Correct!");
        assert_eq!(reveal.next_label, "Complete Mission");
    }

    #[test]
    fn completion_maps_tier_message() {
        let mut quiz = quiz();
        quiz.start();
        for round in 0..5 {
            answer(&mut quiz, round < 3);
            quiz.advance();
        }
        assert_eq!(
            map_quiz_screen(&quiz),
            QuizScreenVm::Completed(CompletionVm {
                tier: Tier::Good,
                score_label: "Your Score: 3/5".to_string(),
                message: "Great work! You have a good understanding of AI bias.",
            })
        );
    }

    #[test]
    fn intents_drive_the_controller() {
        let mut quiz = quiz();
        assert!(!apply_intent(&mut quiz, QuizIntent::Submit).is_applied());
        assert!(apply_intent(&mut quiz, QuizIntent::Start).is_applied());

        let correct = quiz.current_scenario().unwrap().correct_answer().to_string();
        assert!(apply_intent(&mut quiz, QuizIntent::Select(correct)).is_applied());
        assert!(apply_intent(&mut quiz, QuizIntent::Submit).is_applied());
        assert!(!apply_intent(&mut quiz, QuizIntent::Select("other".into())).is_applied());
        assert_eq!(quiz.score(), 1);

        assert!(apply_intent(&mut quiz, QuizIntent::Advance).is_applied());
        assert_eq!(quiz.current_index(), 1);
        assert!(apply_intent(&mut quiz, QuizIntent::Reset).is_applied());
        assert_eq!(quiz.phase(), QuizPhase::Idle);
    }

    #[test]
    fn header_reads_progress_snapshot() {
        let header = map_header(QuizProgress {
            phase: QuizPhase::Revealed,
            index: 2,
            total: 4,
            answered: 3,
            score: 1,
        });
        assert_eq!(header.progress_label, "Scenario 3/4");
        assert_eq!(header.score_label, "Score: 1/4");
    }

    #[test]
    fn tier_messages_are_distinct() {
        assert_ne!(tier_message(Tier::Perfect), tier_message(Tier::Good));
        assert_ne!(tier_message(Tier::Good), tier_message(Tier::NeedsImprovement));
    }
}
