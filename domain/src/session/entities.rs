//! Session domain entities

use crate::core::error::DomainError;
use crate::question::Question;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Mapping from question id to submitted answer value.
///
/// Values are stored verbatim as submitted by the client: strings,
/// booleans, or arrays of strings depending on the question kind. The
/// server deliberately performs no schema validation against the batch.
pub type AnswerMap = serde_json::Map<String, Value>;

/// Represents one question-batch/answer-batch pairing (Entity)
///
/// A session is created unanswered and may be answered at most once.
/// [`Session::record_answers`] enforces the single-submission invariant at
/// the entity level; the store enforces it atomically under its lock.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    title: Option<String>,
    context: Option<String>,
    questions: Vec<Question>,
    answers: Option<AnswerMap>,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        questions: Vec<Question>,
        title: Option<String>,
        context: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            context,
            questions,
            answers: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> Option<&AnswerMap> {
        self.answers.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether answers have been submitted for this session
    pub fn is_answered(&self) -> bool {
        self.answers.is_some()
    }

    /// Record submitted answers, transitioning unanswered → answered.
    ///
    /// Rejects a second submission instead of overwriting the first.
    pub fn record_answers(&mut self, answers: AnswerMap) -> Result<(), DomainError> {
        if self.answers.is_some() {
            return Err(DomainError::AlreadySubmitted);
        }
        self.answers = Some(answers);
        Ok(())
    }
}
