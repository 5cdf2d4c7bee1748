mod controller;
mod phase;
mod progress;
mod settings;
mod tier;

// Public API of the quiz subsystem.
pub use controller::QuizController;
pub use phase::{QuizAction, QuizPhase, Transition};
pub use progress::QuizProgress;
pub use settings::{DEFAULT_SESSION_SIZE, QuizSettings};
pub use tier::Tier;
