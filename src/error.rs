//! Crate-wide error taxonomy.
//!
//! The engine fails fast: every invalid input is reported synchronously
//! to the caller, and no operation produces partial or NaN-bearing
//! results. Nothing is retried internally.

use thiserror::Error;

/// Errors reported by the estimation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A parameter is out of range or nonsensical: zero sizes, a
    /// non-positive standard deviation, a confidence level outside
    /// (0, 100), a zero trial count, or an empty trial set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was attempted against missing or unusable session
    /// state, e.g. sampling from a population that was never
    /// synthesized. Only reachable when the caller bypasses the
    /// synthesize-then-sample contract.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
