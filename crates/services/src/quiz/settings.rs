use quiz_core::Catalog;

use crate::error::QuizConfigError;

/// Number of scenarios in a session unless configured otherwise.
pub const DEFAULT_SESSION_SIZE: usize = 5;

/// Per-session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    session_size: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            session_size: DEFAULT_SESSION_SIZE,
        }
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `QuizConfigError::ZeroSessionSize` if `session_size` is zero.
    pub fn new(session_size: usize) -> Result<Self, QuizConfigError> {
        if session_size == 0 {
            return Err(QuizConfigError::ZeroSessionSize);
        }
        Ok(Self { session_size })
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        self.session_size
    }

    /// Check that every session can be filled from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError::SessionSizeExceedsCatalog` when the catalog is too small.
    pub fn validate_for(&self, catalog: &Catalog) -> Result<(), QuizConfigError> {
        if self.session_size > catalog.len() {
            return Err(QuizConfigError::SessionSizeExceedsCatalog {
                requested: self.session_size,
                available: catalog.len(),
            });
        }
        Ok(())
    }
}
