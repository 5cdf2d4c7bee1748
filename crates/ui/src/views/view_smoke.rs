use super::test_harness::{Step, ViewKind, setup_view_harness};

fn assert_contains(html: &str, expected: &str) {
    assert!(html.contains(expected), "missing {expected} in {html}");
}

#[test]
fn quiz_view_smoke_renders_intro() {
    let harness = setup_view_harness(ViewKind::Quiz, Vec::new());
    let html = harness.render();
    assert_contains(&html, "How to Play:");
    assert_contains(&html, "random scenarios from different Asian contexts");
    assert_contains(&html, "Start Detective Mission");
    assert!(!html.contains("Submit Answer"), "unexpected question in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let harness = setup_view_harness(ViewKind::Quiz, vec![Step::Start]);
    let html = harness.render();
    assert_contains(&html, "Scenario 1/5");
    assert_contains(&html, "Score: 0/5");
    assert_contains(&html, "What is the bias in this scenario?");
    assert_contains(&html, "Submit Answer");
    assert_eq!(html.matches("class=\"quiz-choice\"").count(), 4, "choices in {html}");
    assert!(!html.contains("Bias Type Definitions:"), "reveal too early in {html}");
    assert_contains(&html, "Ferrara, E. (2024)");
}

#[test]
fn quiz_view_smoke_renders_correct_reveal() {
    let harness = setup_view_harness(
        ViewKind::Quiz,
        vec![Step::Start, Step::Answer { correct: true }],
    );
    let html = harness.render();
    assert_contains(&html, "Correct!");
    assert_contains(&html, "Score: 1/5");
    assert_contains(&html, "Bias Category:");
    assert_contains(&html, "Bias Type Definitions:");
    assert_contains(&html, "bias-definition--highlighted");
    assert_contains(&html, "Next Scenario");
    assert_contains(&html, "Ferrara, E. (2024)");
    assert!(!html.contains("Submit Answer"), "submit still shown in {html}");
}

#[test]
fn quiz_view_smoke_renders_incorrect_reveal() {
    let harness = setup_view_harness(
        ViewKind::Quiz,
        vec![Step::Start, Step::Answer { correct: false }],
    );
    let html = harness.render();
    assert_contains(&html, "Incorrect");
    assert_contains(&html, "Correct Answer:");
    assert_contains(&html, "Score: 0/5");
}

#[test]
fn quiz_view_smoke_renders_completion() {
    let mut steps = vec![Step::Start];
    for round in 0..5 {
        steps.push(Step::Answer { correct: round < 3 });
        steps.push(Step::Advance);
    }
    let harness = setup_view_harness(ViewKind::Quiz, steps);
    let html = harness.render();
    assert_contains(&html, "Mission Complete!");
    assert_contains(&html, "Your Score: 3/5");
    assert_contains(&html, "Great work! You have a good understanding of AI bias.");
    assert_contains(&html, "New Mission");
    assert_contains(&html, "Back to Start");
}

#[test]
fn glossary_view_smoke_lists_categories() {
    let harness = setup_view_harness(ViewKind::Glossary, Vec::new());
    let html = harness.render();
    for name in [
        "Sampling Bias",
        "Algorithmic Bias",
        "Representation Bias",
        "Generative Bias",
    ] {
        assert_contains(&html, name);
    }
    assert_contains(&html, "Ferrara, E. (2024)");
    assert!(!html.contains("bias-definition--highlighted"), "highlight in {html}");
}
