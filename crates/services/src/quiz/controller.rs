use std::fmt;
use std::sync::Arc;

use quiz_core::Catalog;
use quiz_core::model::Scenario;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::phase::{QuizAction, QuizPhase, Transition};
use super::progress::QuizProgress;
use super::settings::QuizSettings;
use super::tier::Tier;
use crate::error::QuizConfigError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one playthrough. Only the controller's transitions touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct QuizSession {
    scenarios: Vec<Arc<Scenario>>,
    current: usize,
    score: usize,
    selected: Option<String>,
    phase: QuizPhase,
}

impl QuizSession {
    fn current_scenario(&self) -> Option<&Arc<Scenario>> {
        match self.phase {
            QuizPhase::Idle => None,
            _ => self.scenarios.get(self.current),
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Finite-state machine driving a quiz playthrough.
///
/// `Idle → Playing → Revealed → Playing → … → Completed → Idle`. Calls that make no
/// sense in the current phase return [`Transition::Ignored`] and change nothing.
pub struct QuizController {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    rng: StdRng,
    session: QuizSession,
}

impl QuizController {
    /// Create an idle controller over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` if sessions of the configured size cannot be drawn
    /// from the catalog.
    pub fn new(catalog: Arc<Catalog>, settings: QuizSettings) -> Result<Self, QuizConfigError> {
        settings.validate_for(&catalog)?;
        Ok(Self {
            catalog,
            settings,
            rng: StdRng::from_os_rng(),
            session: QuizSession::default(),
        })
    }

    /// Replace the random source with a seeded one, for reproducible samples.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Draw a fresh sample and begin playing. Valid from `Idle` or `Completed`.
    pub fn start(&mut self) -> Transition {
        if !self.session.phase.allows(QuizAction::Start) {
            return self.ignore(QuizAction::Start);
        }

        let scenarios = self
            .catalog
            .sample(self.settings.session_size(), &mut self.rng);
        log::info!("quiz started with {} scenarios", scenarios.len());

        self.session = QuizSession {
            scenarios,
            current: 0,
            score: 0,
            selected: None,
            phase: QuizPhase::Playing,
        };
        Transition::Applied
    }

    /// Record the tentative answer for the current scenario. Valid only in `Playing`.
    pub fn select_choice(&mut self, choice: impl Into<String>) -> Transition {
        if !self.session.phase.allows(QuizAction::SelectChoice) {
            return self.ignore(QuizAction::SelectChoice);
        }
        self.session.selected = Some(choice.into());
        Transition::Applied
    }

    /// Lock in the selected answer and reveal the result.
    ///
    /// Without a selection this is a no-op. A correct answer (exact string match)
    /// adds one point.
    pub fn submit(&mut self) -> Transition {
        if !self.can_submit() {
            return self.ignore(QuizAction::Submit);
        }

        let session = &mut self.session;
        let correct = match (session.current_scenario(), session.selected.as_deref()) {
            (Some(scenario), Some(answer)) => scenario.is_correct(answer),
            _ => false,
        };
        if correct {
            session.score += 1;
        }
        session.phase = QuizPhase::Revealed;
        log::debug!(
            "answer submitted for scenario {}: correct={correct}, score={}",
            session.current,
            session.score
        );
        Transition::Applied
    }

    /// Move to the next scenario, or complete the session after the last one.
    pub fn advance(&mut self) -> Transition {
        if !self.session.phase.allows(QuizAction::Advance) {
            return self.ignore(QuizAction::Advance);
        }

        let session = &mut self.session;
        if session.current + 1 < session.scenarios.len() {
            session.current += 1;
            session.selected = None;
            session.phase = QuizPhase::Playing;
        } else {
            session.phase = QuizPhase::Completed;
            log::info!(
                "quiz completed: {}/{}",
                session.score,
                session.scenarios.len()
            );
        }
        Transition::Applied
    }

    /// Drop the session and return to `Idle`. Valid from any phase.
    pub fn reset(&mut self) -> Transition {
        self.session = QuizSession::default();
        Transition::Applied
    }

    fn ignore(&self, action: QuizAction) -> Transition {
        log::debug!("ignored {action:?} while {:?}", self.session.phase);
        Transition::Ignored
    }

    //
    // ─── DERIVED STATE ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase
    }

    /// Actions with an effect right now, with `Submit` dropped while nothing is selected.
    #[must_use]
    pub fn available_actions(&self) -> Vec<QuizAction> {
        self.session
            .phase
            .allowed_actions()
            .iter()
            .copied()
            .filter(|action| *action != QuizAction::Submit || self.can_submit())
            .collect()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.session.phase == QuizPhase::Playing
            && self.session.current_scenario().is_some()
            && self
                .session
                .selected
                .as_deref()
                .is_some_and(|choice| !choice.is_empty())
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current
    }

    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.session.current_scenario().map(|scenario| &**scenario)
    }

    /// Scenarios drawn for this session, in play order.
    #[must_use]
    pub fn scenarios(&self) -> &[Arc<Scenario>] {
        &self.session.scenarios
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session.score
    }

    #[must_use]
    pub fn selected_choice(&self) -> Option<&str> {
        self.session.selected.as_deref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.session.phase == QuizPhase::Revealed
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.session.phase == QuizPhase::Completed
    }

    /// Session length, or the configured size before any session exists.
    #[must_use]
    pub fn total(&self) -> usize {
        if self.session.scenarios.is_empty() {
            self.settings.session_size()
        } else {
            self.session.scenarios.len()
        }
    }

    /// Whether the submitted answer matched, once a result is visible.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.session.phase {
            QuizPhase::Revealed | QuizPhase::Completed => {
                let scenario = self.session.current_scenario()?;
                let answer = self.session.selected.as_deref()?;
                Some(scenario.is_correct(answer))
            }
            QuizPhase::Idle | QuizPhase::Playing => None,
        }
    }

    /// Performance tier, available once the session is completed.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        self.is_completed()
            .then(|| Tier::for_score(self.session.score, self.total()))
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let answered = match self.session.phase {
            QuizPhase::Idle => 0,
            QuizPhase::Playing => self.session.current,
            QuizPhase::Revealed => self.session.current + 1,
            QuizPhase::Completed => self.session.scenarios.len(),
        };
        QuizProgress {
            phase: self.session.phase,
            index: self.session.current,
            total: self.total(),
            answered,
            score: self.session.score,
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("catalog_len", &self.catalog.len())
            .field("settings", &self.settings)
            .field("phase", &self.session.phase)
            .field("scenarios_len", &self.session.scenarios.len())
            .field("current", &self.session.current)
            .field("score", &self.session.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
