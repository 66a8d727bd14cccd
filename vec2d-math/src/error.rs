use thiserror::Error;

/// Errors produced by the functions that operate on lists of vectors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MathError {
    /// The function needs at least `expected` vectors.
    #[error("at least {expected} vectors were expected, got {got}")]
    TooFewVectors { expected: usize, got: usize },

    /// The function was given an empty list of vectors.
    #[error("expected a non-empty list of vectors")]
    NoVectors,
}
