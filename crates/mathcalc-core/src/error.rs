//! Error types for the engine and the computation facade.
//!
//! Two layers, deliberately distinct: [`ComputeError::Validation`] means
//! bad user input rejected at the boundary, while [`EngineError`] means a
//! caller reached the engine with an argument the boundary should have
//! rejected.

use thiserror::Error;

/// Engine precondition violations.
///
/// The engine assumes validated non-negative arguments; hitting this
/// variant is a programming error in the caller, not bad user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A negative argument reached the engine.
    #[error("precondition violated: {op} requires non-negative {name}, got {value}")]
    Precondition {
        /// Operation tag ("pow", "fib" or "fact").
        op: &'static str,
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
}

/// Errors surfaced by the computation facade.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// Invalid user input, rejected before the engine runs. Maps to a
    /// client-error response on the API and a non-zero CLI exit.
    #[error("validation error: {0}")]
    Validation(String),

    /// The engine itself rejected an argument.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
