/// Where a playthrough currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    /// No session has been started (or it was reset).
    #[default]
    Idle,
    /// A scenario is on screen and its answer is still open.
    Playing,
    /// The current answer was submitted; result and explanation are visible.
    Revealed,
    /// Every scenario in the session has been answered.
    Completed,
}

/// Operations the presentation layer can invoke on a `QuizController`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizAction {
    Start,
    SelectChoice,
    Submit,
    Advance,
    Reset,
}

impl QuizPhase {
    /// Actions that have an effect in this phase.
    ///
    /// `Submit` is listed for `Playing` even though it still needs a selection;
    /// `QuizController::can_submit` covers that.
    #[must_use]
    pub fn allowed_actions(self) -> &'static [QuizAction] {
        match self {
            Self::Idle | Self::Completed => &[QuizAction::Start, QuizAction::Reset],
            Self::Playing => &[
                QuizAction::SelectChoice,
                QuizAction::Submit,
                QuizAction::Reset,
            ],
            Self::Revealed => &[QuizAction::Advance, QuizAction::Reset],
        }
    }

    #[must_use]
    pub fn allows(self, action: QuizAction) -> bool {
        self.allowed_actions().contains(&action)
    }
}

/// Outcome of a controller call. Ignored calls leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
