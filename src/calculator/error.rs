//! Failure conditions raised by the arithmetic engine.

use thiserror::Error;

/// An evaluation the engine refused to complete.
///
/// Whenever one of these is returned the engine has already discarded its
/// in-progress calculation (display `"0"`, no pending operation), so callers
/// only need to surface the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor of a pending division was exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// A scientific function was applied outside its domain, or produced a
    /// value that is not a finite number.
    #[error("{0}")]
    InvalidDomain(String),
}

impl CalcError {
    pub(crate) fn domain(message: &str) -> Self {
        Self::InvalidDomain(message.to_string())
    }
}
