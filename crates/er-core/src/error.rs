//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and convert `EngineError` into
//! them via `From` impls.

use thiserror::Error;

/// Errors raised while constructing core value types.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("traffic factor must be a positive finite number, got {0}")]
    InvalidTrafficFactor(f64),

    #[error("unknown severity mode {0:?}: expected \"critical\" or \"non-critical\"")]
    UnknownSeverity(String),
}

/// Shorthand result type for `er-core`.
pub type EngineResult<T> = Result<T, EngineError>;
