use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("bias category name cannot be empty")]
    EmptyName,

    #[error("bias category {name:?} has an empty definition")]
    EmptyDefinition { name: String },
}

/// Authoring form of a bias category, as it appears in catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub definition: String,
}

impl CategoryDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }

    /// Validate the draft into an immutable `BiasCategory`.
    ///
    /// Surrounding whitespace is trimmed from the name so lookups by name stay exact.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError` when the name or definition is blank.
    pub fn validate(self) -> Result<BiasCategory, CategoryError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if self.definition.trim().is_empty() {
            return Err(CategoryError::EmptyDefinition { name });
        }
        Ok(BiasCategory {
            name,
            definition: self.definition,
        })
    }
}

/// A classification label with its human-readable definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiasCategory {
    name: String,
    definition: String,
}

impl BiasCategory {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}
