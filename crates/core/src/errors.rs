//! Core error types for the balance engine.
//!
//! Failures raised inside the aggregation helpers propagate unhandled to the
//! builders and then to the caller; a financial total is never patched up
//! locally. Empty input is not an error anywhere in the pipeline.

use thiserror::Error;

use crate::entries::ItemType;
use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the balance engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Balance engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised by the aggregation and combination helpers.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An explicitly unfinished combination branch was reached. This is a
    /// programmer error, not a runtime condition to recover from.
    #[error("Combination branch not implemented: {0}")]
    NotImplemented(&'static str),

    /// A classification reached a switch that has no arm for it. Raised
    /// deliberately so new variants surface instead of being mishandled.
    #[error("Unhandled item type {item_type:?} in {operation}")]
    UnhandledItemType {
        item_type: ItemType,
        operation: &'static str,
    },

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
