use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{BiasCategory, ScenarioId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

pub const MIN_CHOICES: usize = 2;
pub const MAX_CHOICES: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScenarioError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("expected 2 to 4 choices, found {len}")]
    ChoiceCount { len: usize },

    #[error("choices cannot be empty strings")]
    EmptyChoice,

    #[error("choice {0:?} appears more than once")]
    DuplicateChoice(String),

    #[error("correct answer {0:?} is not one of the choices")]
    CorrectAnswerNotInChoices(String),

    #[error("unknown bias category {0:?}")]
    UnknownCategory(String),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Authoring form of a scenario.
///
/// When `choices` is absent the correct answer must be a category name and the
/// choices become every category name, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    pub id: ScenarioId,
    pub title: String,
    #[serde(alias = "scenario")]
    pub body: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
    #[serde(alias = "biasCategory")]
    pub bias_category: String,
    pub explanation: String,
}

impl ScenarioDraft {
    /// Validate the draft against the catalog's categories.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError` for blank text, a bad choice list, an answer that is not
    /// among the choices, or a category the catalog does not define.
    pub fn validate(self, categories: &[BiasCategory]) -> Result<Scenario, ScenarioError> {
        for (field, value) in [
            ("title", &self.title),
            ("body", &self.body),
            ("question", &self.question),
            ("correct answer", &self.correct_answer),
            ("explanation", &self.explanation),
        ] {
            if value.trim().is_empty() {
                return Err(ScenarioError::EmptyField { field });
            }
        }

        if !categories
            .iter()
            .any(|category| category.name() == self.bias_category)
        {
            return Err(ScenarioError::UnknownCategory(self.bias_category));
        }

        let choices = match self.choices {
            Some(choices) => choices,
            None => categories
                .iter()
                .map(|category| category.name().to_string())
                .collect(),
        };

        if !(MIN_CHOICES..=MAX_CHOICES).contains(&choices.len()) {
            return Err(ScenarioError::ChoiceCount { len: choices.len() });
        }
        for (idx, choice) in choices.iter().enumerate() {
            if choice.trim().is_empty() {
                return Err(ScenarioError::EmptyChoice);
            }
            if choices[..idx].contains(choice) {
                return Err(ScenarioError::DuplicateChoice(choice.clone()));
            }
        }
        // Exact match: answers are compared byte-for-byte at submit time too.
        if !choices.contains(&self.correct_answer) {
            return Err(ScenarioError::CorrectAnswerNotInChoices(self.correct_answer));
        }

        Ok(Scenario {
            id: self.id,
            title: self.title,
            body: self.body,
            question: self.question,
            choices,
            correct_answer: self.correct_answer,
            bias_category: self.bias_category,
            explanation: self.explanation,
        })
    }
}

//
// ─── SCENARIO ──────────────────────────────────────────────────────────────────
//

/// One validated quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    id: ScenarioId,
    title: String,
    body: String,
    question: String,
    choices: Vec<String>,
    correct_answer: String,
    bias_category: String,
    explanation: String,
}

impl Scenario {
    #[must_use]
    pub fn id(&self) -> ScenarioId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn bias_category(&self) -> &str {
        &self.bias_category
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
