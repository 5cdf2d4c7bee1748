use super::phase::QuizPhase;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub phase: QuizPhase,
    /// Zero-based position of the current scenario.
    pub index: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
}

