use std::fmt;
use std::path::PathBuf;

use quiz_core::{Catalog, CatalogDraft};

use crate::error::CatalogSourceError;

/// Where the scenario catalog is loaded from at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The dataset compiled into the binary.
    #[default]
    Builtin,
    /// A JSON file in the `CatalogDraft` shape.
    JsonFile(PathBuf),
}

impl CatalogSource {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogSourceError` if the file cannot be read or parsed, or if the
    /// catalog fails validation.
    pub fn load(&self) -> Result<Catalog, CatalogSourceError> {
        let catalog = match self {
            Self::Builtin => Catalog::builtin()?,
            Self::JsonFile(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| {
                    CatalogSourceError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                parse_catalog_json(&raw)?
            }
        };
        log::info!("loaded {} scenarios from {self}", catalog.len());
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in catalog"),
            Self::JsonFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse and validate a catalog from JSON text.
///
/// # Errors
///
/// Returns `CatalogSourceError::Parse` for malformed JSON and
/// `CatalogSourceError::Catalog` for authoring defects.
pub fn parse_catalog_json(raw: &str) -> Result<Catalog, CatalogSourceError> {
    let draft: CatalogDraft = serde_json::from_str(raw)?;
    Ok(draft.validate()?)
}
