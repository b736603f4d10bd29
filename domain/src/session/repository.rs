//! Session repository trait

use crate::core::error::DomainError;
use crate::question::Question;
use crate::session::entities::{AnswerMap, Session};
use async_trait::async_trait;

/// Repository trait for question sessions
///
/// This is a domain-level abstraction over session storage. The in-memory
/// implementation lives in the infrastructure layer; the wait loop and the
/// HTTP handlers both go through this trait.
///
/// Implementations must keep `submit` atomic: the answered check and the
/// write have to happen without interleaving so that two racing submissions
/// cannot both succeed.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create a session with a fresh unique id and no answers.
    ///
    /// Always succeeds for valid input; returns the stored record.
    async fn create(
        &self,
        questions: Vec<Question>,
        title: Option<String>,
        context: Option<String>,
    ) -> Session;

    /// Look up a session by id. An unknown id is a legitimate miss, not an
    /// error.
    async fn get(&self, id: &str) -> Option<Session>;

    /// Submit answers for a session, storing the map verbatim.
    ///
    /// Fails with [`DomainError::SessionNotFound`] for unknown ids and
    /// [`DomainError::AlreadySubmitted`] when answers are already present.
    async fn submit(&self, id: &str, answers: AnswerMap) -> Result<(), DomainError>;

    /// Remove a session. Idempotent; returns whether a record existed.
    async fn delete(&self, id: &str) -> bool;
}
