//! Error types for catalog construction and save-file I/O.
//!
//! Purchase, page navigation, missing saves and corrupt saves are not errors:
//! each has a defined fallback and never reaches these enums.

use thiserror::Error;

/// The tier data handed to [`crate::catalog::TierCatalog::new`] is unusable.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("tier data arrays differ in length: {rates} rates, {costs} costs, {names} names")]
    LengthMismatch {
        rates: usize,
        costs: usize,
        names: usize,
    },

    #[error("tier catalog is empty")]
    Empty,

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("tier {index} has a non-positive or non-finite {field}: {value}")]
    InvalidValue {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

/// Writing or locating the save file failed. The in-memory game is untouched.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not determine a save directory for this platform")]
    NoSaveDirectory,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SaveResult<T> = std::result::Result<T, SaveError>;
