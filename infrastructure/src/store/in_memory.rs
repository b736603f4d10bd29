//! In-memory session store.
//!
//! Process-local with no persistence: every session is lost on restart.
//! Acceptable because sessions live for a single interactive Q&A round.

use askform_domain::{AnswerMap, DomainError, Question, Session, SessionRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Mutex-guarded map from session id to session record.
///
/// All four operations take the same lock, so submit's answered check and
/// write happen without interleaving even when the HTTP handler races the
/// wait loop on the same record. Ids are uuid v4, never reused while a
/// session with that id is live.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn create(
        &self,
        questions: Vec<Question>,
        title: Option<String>,
        context: Option<String>,
    ) -> Session {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone(), questions, title, context);
        self.sessions
            .lock()
            .await
            .insert(id.clone(), session.clone());
        debug!("Created session {}", id);
        session
    }

    async fn get(&self, id: &str) -> Option<Session> {
        self.sessions.lock().await.get(id).cloned()
    }

    async fn submit(&self, id: &str, answers: AnswerMap) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(id).ok_or(DomainError::SessionNotFound)?;
        session.record_answers(answers)?;
        debug!("Recorded answers for session {}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> bool {
        let existed = self.sessions.lock().await.remove(id).is_some();
        if existed {
            debug!("Deleted session {}", id);
        }
        existed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn questions() -> Vec<Question> {
        vec![Question::new("q1", "First?"), Question::new("q2", "Second?")]
    }

    fn answers(value: &str) -> AnswerMap {
        let mut map = AnswerMap::new();
        map.insert("q1".to_string(), json!(value));
        map
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = InMemorySessionStore::new();
        let created = store
            .create(questions(), Some("Title".to_string()), None)
            .await;

        let fetched = store.get(created.id()).await.unwrap();
        assert_eq!(fetched.id(), created.id());
        assert_eq!(fetched.questions(), questions().as_slice());
        assert_eq!(fetched.title(), Some("Title"));
        assert!(fetched.answers().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = InMemorySessionStore::new();
        let a = store.create(questions(), None, None).await;
        let b = store.create(questions(), None, None).await;
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_a_miss() {
        let store = InMemorySessionStore::new();
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_submit_unknown_id_fails_without_side_effects() {
        let store = InMemorySessionStore::new();
        let created = store.create(questions(), None, None).await;

        let err = store.submit("nope", answers("x")).await.unwrap_err();
        assert_eq!(err, DomainError::SessionNotFound);
        // The existing session is untouched.
        assert!(store.get(created.id()).await.unwrap().answers().is_none());
    }

    #[tokio::test]
    async fn test_double_submit_keeps_first_answers() {
        let store = InMemorySessionStore::new();
        let created = store.create(questions(), None, None).await;

        store.submit(created.id(), answers("first")).await.unwrap();
        let err = store
            .submit(created.id(), answers("second"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::AlreadySubmitted);

        let stored = store.get(created.id()).await.unwrap();
        assert_eq!(stored.answers().unwrap()["q1"], "first");
    }

    #[tokio::test]
    async fn test_submit_stores_map_verbatim() {
        let store = InMemorySessionStore::new();
        let created = store.create(questions(), None, None).await;

        // Extra keys and mismatched types pass through untouched.
        let mut map = AnswerMap::new();
        map.insert("q1".to_string(), json!(["a", "b"]));
        map.insert("unknown".to_string(), json!(42));
        store.submit(created.id(), map.clone()).await.unwrap();

        let stored = store.get(created.id()).await.unwrap();
        assert_eq!(stored.answers(), Some(&map));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemorySessionStore::new();
        let created = store.create(questions(), None, None).await;

        assert!(store.delete(created.id()).await);
        assert!(store.get(created.id()).await.is_none());
        assert!(!store.delete(created.id()).await);
        assert!(!store.delete("never-existed").await);
    }
}
