use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    BiasCategory, CategoryDraft, CategoryError, Scenario, ScenarioDraft, ScenarioError, ScenarioId,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Authoring defects found while loading a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog defines no bias categories")]
    NoCategories,

    #[error("catalog contains no scenarios")]
    NoScenarios,

    #[error("invalid bias category at position {index}: {source}")]
    Category {
        index: usize,
        #[source]
        source: CategoryError,
    },

    #[error("bias category {0:?} is defined more than once")]
    DuplicateCategory(String),

    #[error("scenario id {0} is used more than once")]
    DuplicateScenarioId(ScenarioId),

    #[error("invalid scenario {id}: {source}")]
    Scenario {
        id: ScenarioId,
        #[source]
        source: ScenarioError,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Serialized form of a whole catalog (categories first, then scenarios).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDraft {
    pub categories: Vec<CategoryDraft>,
    pub scenarios: Vec<ScenarioDraft>,
}

impl CatalogDraft {
    /// # Errors
    ///
    /// See [`Catalog::from_drafts`].
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        Catalog::from_drafts(self.categories, self.scenarios)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable set of scenarios plus the bias categories they reference.
///
/// Scenarios are held behind `Arc` so samples share them with the catalog instead of
/// copying text. The catalog is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<BiasCategory>,
    scenarios: Vec<Arc<Scenario>>,
}

impl Catalog {
    /// Validate drafts into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for the first authoring defect found: missing categories
    /// or scenarios, duplicate category names or scenario ids, or an invalid scenario.
    pub fn from_drafts(
        categories: Vec<CategoryDraft>,
        scenarios: Vec<ScenarioDraft>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        if scenarios.is_empty() {
            return Err(CatalogError::NoScenarios);
        }

        let mut validated = Vec::with_capacity(categories.len());
        for (index, draft) in categories.into_iter().enumerate() {
            let category = draft
                .validate()
                .map_err(|source| CatalogError::Category { index, source })?;
            if validated
                .iter()
                .any(|seen: &BiasCategory| seen.name() == category.name())
            {
                return Err(CatalogError::DuplicateCategory(category.name().to_string()));
            }
            validated.push(category);
        }

        let mut ids = HashSet::with_capacity(scenarios.len());
        let mut items = Vec::with_capacity(scenarios.len());
        for draft in scenarios {
            let id = draft.id;
            if !ids.insert(id) {
                return Err(CatalogError::DuplicateScenarioId(id));
            }
            let scenario = draft
                .validate(&validated)
                .map_err(|source| CatalogError::Scenario { id, source })?;
            items.push(Arc::new(scenario));
        }

        log::debug!(
            "catalog loaded: {} categories, {} scenarios",
            validated.len(),
            items.len()
        );

        Ok(Self {
            categories: validated,
            scenarios: items,
        })
    }

    /// The embedded dataset shipped with the game.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data itself is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        crate::builtin::catalog_draft().validate()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    #[must_use]
    pub fn scenarios(&self) -> &[Arc<Scenario>] {
        &self.scenarios
    }

    /// Categories in authoring order.
    #[must_use]
    pub fn categories(&self) -> &[BiasCategory] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&BiasCategory> {
        self.categories.iter().find(|category| category.name() == name)
    }

    #[must_use]
    pub fn scenario(&self, id: ScenarioId) -> Option<&Arc<Scenario>> {
        self.scenarios.iter().find(|scenario| scenario.id() == id)
    }

    /// Draw `n` distinct scenarios uniformly at random, in random order.
    ///
    /// Uses a full Fisher–Yates permutation of the catalog indices and keeps the
    /// first `n`. Asking for more than the catalog holds returns every scenario.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Arc<Scenario>> {
        let available = self.scenarios.len();
        if n > available {
            log::warn!("requested {n} scenarios but the catalog only has {available}");
        }

        let mut order: Vec<usize> = (0..available).collect();
        order.shuffle(rng);
        order.truncate(n);

        order
            .into_iter()
            .map(|idx| Arc::clone(&self.scenarios[idx]))
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
