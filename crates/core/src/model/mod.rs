mod category;
mod ids;
mod scenario;

pub use category::{BiasCategory, CategoryDraft, CategoryError};
pub use ids::ScenarioId;
pub use scenario::{MAX_CHOICES, MIN_CHOICES, Scenario, ScenarioDraft, ScenarioError};
