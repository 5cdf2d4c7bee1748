#![forbid(unsafe_code)]

pub mod catalog_source;
pub mod error;
pub mod quiz;

pub use catalog_source::{CatalogSource, parse_catalog_json};
pub use error::{CatalogSourceError, QuizConfigError};
pub use quiz::{
    DEFAULT_SESSION_SIZE, QuizAction, QuizController, QuizPhase, QuizProgress, QuizSettings, Tier,
    Transition,
};
