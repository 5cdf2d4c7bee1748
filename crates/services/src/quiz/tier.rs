/// Qualitative end-of-session performance label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Perfect,
    Good,
    NeedsImprovement,
}

impl Tier {
    /// Minimum score for `Good`: 60% of `total`, rounded up.
    #[must_use]
    pub fn good_threshold(total: usize) -> usize {
        (total * 3).div_ceil(5)
    }

    #[must_use]
    pub fn for_score(score: usize, total: usize) -> Self {
        if score == total {
            Self::Perfect
        } else if score >= Self::good_threshold(total) {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }
}
