//! HTTP routes for the question form.
//!
//! JSON API consumed by the embedded form renderer, plus the static page
//! itself. Everything is keyed by session id; submitted answers are never
//! readable back through this surface, so a second viewer of the same link
//! only learns that the session was already submitted.

use askform_domain::{DomainError, Question, SessionRepository};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("static/index.html");
const APP_JS: &str = include_str!("static/app.js");

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionRepository>,
}

/// Build the router for the form server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/session/{id}", get(get_session))
        .route("/api/session/{id}/submit", post(submit_answers))
        .route("/health", get(health))
        .route("/session/{id}", get(form_page))
        .route("/app.js", get(form_script))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorEnvelope {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorEnvelope>);

fn session_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope {
            error: "Session not found or expired".to_string(),
        }),
    )
}

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorEnvelope {
            error: message.to_string(),
        }),
    )
}

/// Session metadata as exposed to the form renderer.
///
/// Never carries the answer map: once submitted, only the
/// `alreadySubmitted` flag is visible.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub questions: Vec<Question>,
    pub already_submitted: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitAck {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthView {
    pub status: &'static str,
    /// Unix milliseconds
    pub timestamp: i64,
}

/// `GET /api/session/{id}` — session metadata and question list.
pub(crate) async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state.store.get(&id).await.ok_or_else(session_not_found)?;

    Ok(Json(SessionView {
        id: session.id().to_string(),
        title: session.title().map(str::to_string),
        context: session.context().map(str::to_string),
        questions: session.questions().to_vec(),
        already_submitted: session.is_answered(),
    }))
}

/// `POST /api/session/{id}/submit` — record the answer map, once.
pub(crate) async fn submit_answers(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<SubmitAck>, ApiError> {
    // Existence first so an unknown id reads as 404 even with a bad body.
    let session = state.store.get(&id).await.ok_or_else(session_not_found)?;
    if session.is_answered() {
        return Err(bad_request("Answers already submitted"));
    }

    let Value::Object(answers) = body else {
        return Err(bad_request("Invalid answers format"));
    };

    state.store.submit(&id, answers).await.map_err(|e| match e {
        DomainError::SessionNotFound => session_not_found(),
        DomainError::AlreadySubmitted => bad_request("Answers already submitted"),
    })?;

    Ok(Json(SubmitAck {
        success: true,
        message: "Answers submitted successfully".to_string(),
    }))
}

/// `GET /health` — liveness probe, no dependency checks.
pub(crate) async fn health() -> Json<HealthView> {
    Json(HealthView {
        status: "ok",
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// `GET /session/{id}` — the form page. Served for any id; the client
/// fetches the session and renders the not-found error itself.
pub(crate) async fn form_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /app.js` — the form renderer script.
pub(crate) async fn form_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemorySessionStore;
    use askform_domain::{Question, QuestionKind};
    use serde_json::json;

    fn state() -> AppState {
        AppState {
            store: Arc::new(InMemorySessionStore::new()),
        }
    }

    async fn seeded_session(state: &AppState) -> String {
        let session = state
            .store
            .create(
                vec![
                    Question::new("q1", "First?"),
                    Question::new("ship_it", "Ship it?").with_kind(QuestionKind::Boolean),
                ],
                Some("Release check".to_string()),
                Some("Answer before the deploy".to_string()),
            )
            .await;
        session.id().to_string()
    }

    #[tokio::test]
    async fn test_get_session_returns_questions() {
        let state = state();
        let id = seeded_session(&state).await;

        let view = get_session(State(state), Path(id.clone())).await.unwrap().0;
        assert_eq!(view.id, id);
        assert_eq!(view.title.as_deref(), Some("Release check"));
        assert_eq!(view.questions.len(), 2);
        assert!(!view.already_submitted);
    }

    #[tokio::test]
    async fn test_get_unknown_session_is_404() {
        let (status, body) = get_session(State(state()), Path("nope".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Session not found or expired");
    }

    #[tokio::test]
    async fn test_get_after_submit_flags_without_answers() {
        let state = state();
        let id = seeded_session(&state).await;
        let ack = submit_answers(
            State(state.clone()),
            Path(id.clone()),
            Json(json!({"q1": "hello"})),
        )
        .await
        .unwrap()
        .0;
        assert!(ack.success);

        let view = get_session(State(state), Path(id)).await.unwrap().0;
        assert!(view.already_submitted);
        // The view struct has no answers field at all; double-check the
        // serialized form to be explicit about the contract.
        let serialized = serde_json::to_value(&view).unwrap();
        assert!(serialized.get("answers").is_none());
        assert_eq!(serialized["alreadySubmitted"], true);
    }

    #[tokio::test]
    async fn test_submit_happy_path() {
        let state = state();
        let id = seeded_session(&state).await;

        let ack = submit_answers(
            State(state.clone()),
            Path(id.clone()),
            Json(json!({"q1": "hello", "ship_it": true})),
        )
        .await
        .unwrap()
        .0;
        assert!(ack.success);
        assert_eq!(ack.message, "Answers submitted successfully");

        let stored = state.store.get(&id).await.unwrap();
        assert_eq!(stored.answers().unwrap()["ship_it"], true);
    }

    #[tokio::test]
    async fn test_submit_unknown_session_is_404() {
        let (status, _) = submit_answers(
            State(state()),
            Path("nope".to_string()),
            Json(json!({"q1": "x"})),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_double_submit_is_rejected() {
        let state = state();
        let id = seeded_session(&state).await;

        let ack = submit_answers(
            State(state.clone()),
            Path(id.clone()),
            Json(json!({"q1": "first"})),
        )
        .await
        .unwrap()
        .0;
        assert!(ack.success);

        let (status, body) = submit_answers(
            State(state.clone()),
            Path(id.clone()),
            Json(json!({"q1": "second"})),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Answers already submitted");

        let stored = state.store.get(&id).await.unwrap();
        assert_eq!(stored.answers().unwrap()["q1"], "first");
    }

    #[tokio::test]
    async fn test_submit_non_object_body_is_rejected() {
        let state = state();
        let id = seeded_session(&state).await;

        for body in [json!(42), json!("nope"), json!([1, 2]), json!(null)] {
            let (status, envelope) =
                submit_answers(State(state.clone()), Path(id.clone()), Json(body))
                    .await
                    .unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(envelope.error, "Invalid answers format");
        }

        // Still unanswered afterwards.
        assert!(!state.store.get(&id).await.unwrap().is_answered());
    }

    #[tokio::test]
    async fn test_health_payload() {
        let view = health().await.0;
        assert_eq!(view.status, "ok");
        assert!(view.timestamp > 0);
    }
}
