//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The store rejections double as the HTTP error vocabulary: the web layer
/// maps [`DomainError::SessionNotFound`] to 404 and
/// [`DomainError::AlreadySubmitted`] to 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session not found or expired")]
    SessionNotFound,

    #[error("Answers already submitted")]
    AlreadySubmitted,
}

impl DomainError {
    /// Check if this error represents an unknown session id
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::SessionNotFound)
    }
}
