use thiserror::Error;

/// Failure reported by an external lookup (registry, archive, scorer).
///
/// Only [`LookupError::Transient`] is worth retrying. [`LookupError::NotFound`]
/// is a well-formed "no record" answer and carries its own meaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no record found")]
    NotFound,
    #[error("transient failure: {0}")]
    Transient(String),
}

impl LookupError {
    pub fn transient(err: impl std::fmt::Display) -> Self {
        Self::Transient(err.to_string())
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}
