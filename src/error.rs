//! Error types for the calculation library.

use thiserror::Error;

/// Result type for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors surfaced by the calculation layer
#[derive(Debug, Error)]
pub enum CalcError {
    /// Unit tag outside the supported set
    #[error("unknown unit: {0}")]
    InvalidUnit(String),

    /// Activity level outside the enumerated five
    #[error("unknown activity level: {0}")]
    InvalidActivityLevel(String),

    /// Injection site label outside the canonical set
    #[error("unknown injection site: {0}")]
    InvalidSite(String),

    /// Schedule stride that would never advance the date
    #[error("injection stride must be positive, got {0}")]
    InvalidStride(i64),

    /// Date string failed to parse
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}
