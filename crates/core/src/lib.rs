#![forbid(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod model;

pub use catalog::{Catalog, CatalogDraft, CatalogError};
