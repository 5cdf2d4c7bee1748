//! Embedded scenario dataset.
//!
//! Categories and explanations follow Ferrara, E. (2024), "Fairness and bias in
//! artificial intelligence: A brief survey of sources, impacts, and mitigation
//! strategies", Sci 6(1), 3.

use crate::catalog::CatalogDraft;
use crate::model::{CategoryDraft, ScenarioDraft, ScenarioId};

pub const REFERENCE: &str = "Ferrara, E. (2024). Fairness and bias in artificial intelligence: \
A brief survey of sources, impacts, and mitigation strategies. Sci, 6(1), 3. \
https://doi.org/10.3390/sci6010003";

const QUESTION: &str = "What is the bias in this scenario?";

const CATEGORIES: [(&str, &str); 4] = [
    (
        "Sampling Bias",
        "Training data do not represent the wider population, so the model struggles to generalize fairly across different groups (Ferrara, 2024).",
    ),
    (
        "Algorithmic Bias",
        "Design choices in the model or its objective function privilege certain attributes and systematically disadvantage others (Ferrara, 2024).",
    ),
    (
        "Representation Bias",
        "Key communities or traits are underrepresented in the dataset, leading to worse performance for those groups (Ferrara, 2024).",
    ),
    (
        "Generative Bias",
        "Content produced by generative systems echoes stereotypes or imbalances embedded in the data used to train them (Ferrara, 2024).",
    ),
];

struct Entry {
    id: u32,
    title: &'static str,
    body: &'static str,
    choices: [&'static str; 4],
    correct: usize,
    category: &'static str,
    explanation: &'static str,
}

const SCENARIOS: [Entry; 5] = [
    Entry {
        id: 1,
        title: "Chinese Social Media AI Writer",
        body: "A Chinese social media manager used an AI writing assistant to promote career paths after graduation. The AI suggested a poster that pictured male doctors and engineers alongside female teachers and nurses, even though no genders were specified in the prompt.",
        choices: [
            "The AI reinforced gender stereotypes in how professions were depicted.",
            "The AI promoted careers with higher average salaries over others.",
            "The AI produced a poster that mixed both male and female characters.",
            "The AI responded only in simplified Chinese, ignoring multilingual audiences.",
        ],
        correct: 0,
        category: "Generative Bias",
        explanation: "Ferrara (2024) notes that generative systems can reproduce stereotypical associations present in their training data. The assistant mirrored gendered patterns by pairing specific jobs with particular genders, reinforcing harmful stereotypes.",
    },
    Entry {
        id: 2,
        title: "Singapore Voice Assistant",
        body: "A family bought a smart home voice assistant designed for Singaporeans. It accurately recognizes Singaporean English and Mandarin, but frequently misunderstands users speaking Tamil or Malay.",
        choices: [
            "The microphone sensitivity was calibrated for higher-pitched voices only.",
            "The training data contained far more English and Mandarin samples than Tamil or Malay.",
            "Users were not speaking close enough to the smart speaker.",
            "The assistant intentionally blocked responses in languages outside the app store settings.",
        ],
        correct: 1,
        category: "Representation Bias",
        explanation: "Ferrara (2024) describes how skewed datasets can underrepresent certain communities. Because Tamil and Malay speech were limited in the training set, the assistant fails to serve speakers of those languages fairly.",
    },
    Entry {
        id: 3,
        title: "Indonesian Language Learning App",
        body: "A language learning app asks users for their full name and username on login. The app recommends beginner lessons to users with Indonesian names but advanced courses to users with Western names.",
        choices: [
            "The app forgot to ask users about their country of origin during sign-up.",
            "The app inferred proficiency from naming patterns, creating unfair assumptions.",
            "The app experienced a bug that swapped lesson levels randomly.",
            "The app limited advanced lessons to paying subscribers only.",
        ],
        correct: 1,
        category: "Sampling Bias",
        explanation: "Ferrara (2024) highlights that biased historical data can encode unjust correlations. The model learned to equate Western names with fluency and Indonesian names with beginner status, perpetuating inequities unrelated to individual skill.",
    },
    Entry {
        id: 4,
        title: "Manila Video Streaming App",
        body: "A video streaming platform trained its recommendation system on viewing data from Metro Manila users. When the service expanded nationwide, viewers in other provinces kept receiving Metro Manila-centric suggestions that did not match their preferences.",
        choices: [
            "The dataset overrepresented Metro Manila viewers and ignored broader Filipino preferences.",
            "The app did not update its user interface translations for regional dialects.",
            "The streaming catalog only licensed shows produced in the capital region.",
            "The recommendation algorithm could not process new user accounts from provincial ISPs.",
        ],
        correct: 0,
        category: "Sampling Bias",
        explanation: "Ferrara (2024) explains that when models rely on narrow datasets, they fail to generalize to other populations. Because the training data focused on Metro Manila, recommendations for the rest of the country remained biased toward urban tastes.",
    },
    Entry {
        id: 5,
        title: "Japanese Dating App Algorithm",
        body: "A Tokyo-based dating app collects information such as height, age, gender, and interests. The app appears to prioritize taller users by giving them more visibility, regardless of shared interests or compatibility.",
        choices: [
            "Shorter users are deprioritized because the algorithm encodes height-based preference weights.",
            "Users who sign up during peak hours wait longer to see potential matches.",
            "Users who leave profile sections blank are automatically hidden from search.",
            "Shorter users forget to complete all compatibility quizzes, so they see fewer matches.",
        ],
        correct: 0,
        category: "Algorithmic Bias",
        explanation: "Ferrara (2024) notes that design choices in scoring functions can amplify inequities. Prioritizing height in the matching logic advantages taller users while sidelining others, demonstrating algorithmic bias in the app's ranking mechanism.",
    },
];

/// Drafts for the embedded dataset. `Catalog::builtin` validates them.
#[must_use]
pub fn catalog_draft() -> CatalogDraft {
    let categories = CATEGORIES
        .iter()
        .map(|(name, definition)| CategoryDraft::new(*name, *definition))
        .collect();

    let scenarios = SCENARIOS
        .iter()
        .map(|entry| ScenarioDraft {
            id: ScenarioId::new(entry.id),
            title: entry.title.to_string(),
            body: entry.body.to_string(),
            question: QUESTION.to_string(),
            choices: Some(entry.choices.iter().map(|c| (*c).to_string()).collect()),
            correct_answer: entry.choices[entry.correct].to_string(),
            bias_category: entry.category.to_string(),
            explanation: entry.explanation.to_string(),
        })
        .collect();

    CatalogDraft {
        categories,
        scenarios,
    }
}
