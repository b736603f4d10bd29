//! End-to-end wait loop scenarios against the real in-memory store.
//!
//! The capturing announcer plays the human's side: it hands the test the
//! form URL (and thus the session id) so the test can submit answers the
//! way the HTTP handler would.

use askform_application::{
    AskOutcome, AskQuestionsInput, AskQuestionsUseCase, SessionAnnouncer, WaitParams,
};
use askform_domain::{AnswerMap, Question, QuestionKind, SessionRepository};
use askform_infrastructure::InMemorySessionStore;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};

struct ChannelAnnouncer(UnboundedSender<String>);

impl SessionAnnouncer for ChannelAnnouncer {
    fn announce(&self, url: &str) {
        let _ = self.0.send(url.to_string());
    }
}

fn session_id_from(url: &str) -> String {
    url.rsplit('/').next().unwrap().to_string()
}

struct Harness {
    store: Arc<InMemorySessionStore>,
    url_rx: mpsc::UnboundedReceiver<String>,
    task: tokio::task::JoinHandle<
        Result<askform_application::AskQuestionsOutput, askform_application::AskQuestionsError>,
    >,
}

fn start(input: AskQuestionsInput, params: WaitParams) -> Harness {
    let store = Arc::new(InMemorySessionStore::new());
    let (url_tx, url_rx) = mpsc::unbounded_channel();
    let use_case = AskQuestionsUseCase::new(store.clone())
        .with_announcer(Arc::new(ChannelAnnouncer(url_tx)))
        .with_params(params);
    let task = tokio::spawn(async move { use_case.execute(input, "http://localhost:3847").await });
    Harness {
        store,
        url_rx,
        task,
    }
}

#[tokio::test]
async fn scenario_free_text_submission() {
    let input = AskQuestionsInput::new(vec![Question::new("q1", "Say hello?")]);
    let mut harness = start(input, WaitParams::from_millis(5000, 25));

    let url = harness.url_rx.recv().await.unwrap();
    assert!(url.starts_with("http://localhost:3847/session/"));
    let id = session_id_from(&url);

    let mut answers = AnswerMap::new();
    answers.insert("q1".to_string(), json!("hello"));
    harness.store.submit(&id, answers).await.unwrap();

    let output = harness.task.await.unwrap().unwrap();
    assert_eq!(output.outcome, AskOutcome::Completed);
    assert_eq!(output.answers["q1"], "hello");
    assert!(output.summary.contains("- q1: hello"));

    // Retired after completion.
    assert!(harness.store.get(&id).await.is_none());
}

#[tokio::test]
async fn scenario_boolean_renders_yes() {
    let input = AskQuestionsInput::new(vec![
        Question::new("ship_it", "Ship it?").with_kind(QuestionKind::Boolean),
    ]);
    let mut harness = start(input, WaitParams::from_millis(5000, 25));

    let id = session_id_from(&harness.url_rx.recv().await.unwrap());
    let mut answers = AnswerMap::new();
    answers.insert("ship_it".to_string(), json!(true));
    harness.store.submit(&id, answers).await.unwrap();

    let output = harness.task.await.unwrap().unwrap();
    assert_eq!(output.outcome, AskOutcome::Completed);
    assert!(output.summary.contains("- ship_it: yes"));
}

#[tokio::test]
async fn scenario_timeout_retires_session() {
    let input = AskQuestionsInput::new(vec![Question::new("q1", "Anyone there?")]);
    let mut harness = start(input, WaitParams::from_millis(300, 25));

    let id = session_id_from(&harness.url_rx.recv().await.unwrap());

    let output = harness.task.await.unwrap().unwrap();
    assert_eq!(output.outcome, AskOutcome::TimedOut);
    assert!(output.summary.starts_with("Timeout: User did not submit answers"));
    assert!(output.answers.is_empty());

    // No longer retrievable afterward.
    assert!(harness.store.get(&id).await.is_none());
}
