//! Error types for nearbit.

use thiserror::Error;

/// Errors that can occur during index construction or querying.
///
/// Parameter and prime-table errors are raised at construction, never at
/// query time. A dimension mismatch is raised the first time an offending
/// vector is seen, at build or at query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LshError {
    /// A construction parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An item or query vector does not match the index dimensionality.
    #[error("dimension mismatch: expected {expected} bits, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The requested subset size exceeds the precomputed prime table.
    #[error("prime table exhausted: k = {requested} but only {available} primes are available")]
    PrimeTableExhausted { requested: usize, available: usize },
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, LshError>;
