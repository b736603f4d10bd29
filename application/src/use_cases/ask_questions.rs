//! Ask Questions use case.
//!
//! Creates an ephemeral question session, announces its form URL, then
//! blocks by polling the session store until the human submits answers or
//! the deadline elapses. Either way the session is deleted exactly once
//! before the use case returns; no session outlives its wait loop.

use crate::config::WaitParams;
use crate::ports::announcer::{NoAnnouncer, SessionAnnouncer};
use crate::ports::browser_launcher::{BrowserLauncher, NoBrowserLauncher};
use askform_domain::{AnswerMap, Question, SessionRepository, format_summary};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Errors that can occur before the wait loop starts.
///
/// Timeout is deliberately not here: it is a terminal outcome, reported
/// through [`AskOutcome::TimedOut`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AskQuestionsError {
    #[error("Question batch is empty")]
    NoQuestions,

    #[error("Question id cannot be empty")]
    EmptyQuestionId,

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(String),
}

/// Input for the [`AskQuestionsUseCase`].
///
/// Mirrors the tool-facing contract: an optional title and context plus an
/// ordered question batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub questions: Vec<Question>,
}

impl AskQuestionsInput {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            title: None,
            context: None,
            questions,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Parse a batch from JSON.
    ///
    /// Accepts either the full object form `{title?, context?, questions}`
    /// or a bare array of questions.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Self>(json) {
            Ok(input) => Ok(input),
            Err(object_err) => match serde_json::from_str::<Vec<Question>>(json) {
                Ok(questions) => Ok(Self::new(questions)),
                // The object-shaped error is the more useful one to surface.
                Err(_) => Err(object_err),
            },
        }
    }

    fn validate(&self) -> Result<(), AskQuestionsError> {
        if self.questions.is_empty() {
            return Err(AskQuestionsError::NoQuestions);
        }
        let mut seen = HashSet::new();
        for question in &self.questions {
            if question.id.trim().is_empty() {
                return Err(AskQuestionsError::EmptyQuestionId);
            }
            if !seen.insert(question.id.as_str()) {
                return Err(AskQuestionsError::DuplicateQuestionId(question.id.clone()));
            }
        }
        Ok(())
    }
}

/// How the wait loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskOutcome {
    /// The human submitted answers before the deadline.
    Completed,
    /// The deadline elapsed without a submission.
    TimedOut,
}

/// Result of an Ask Questions run: a text summary for the agent transcript
/// plus the raw answer map for structured consumption.
#[derive(Debug, Clone, Serialize)]
pub struct AskQuestionsOutput {
    pub outcome: AskOutcome,
    pub summary: String,
    pub answers: AnswerMap,
}

/// Use case for collecting a batch of answers through the web form.
///
/// Flow:
/// 1. Validate the batch (non-empty, unique non-blank ids)
/// 2. Create the session and build its form URL
/// 3. Announce the URL and best-effort open the browser
/// 4. Poll the store every `poll_interval` until answered or `timeout`
/// 5. Delete the session and return summary + raw answers
pub struct AskQuestionsUseCase {
    store: Arc<dyn SessionRepository>,
    browser: Arc<dyn BrowserLauncher>,
    announcer: Arc<dyn SessionAnnouncer>,
    params: WaitParams,
}

impl AskQuestionsUseCase {
    pub fn new(store: Arc<dyn SessionRepository>) -> Self {
        Self {
            store,
            browser: Arc::new(NoBrowserLauncher),
            announcer: Arc::new(NoAnnouncer),
            params: WaitParams::default(),
        }
    }

    /// Set the browser launcher adapter.
    pub fn with_browser_launcher(mut self, browser: Arc<dyn BrowserLauncher>) -> Self {
        self.browser = browser;
        self
    }

    /// Set the URL announcer adapter.
    pub fn with_announcer(mut self, announcer: Arc<dyn SessionAnnouncer>) -> Self {
        self.announcer = announcer;
        self
    }

    /// Set the wait loop parameters.
    pub fn with_params(mut self, params: WaitParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the interaction against a server reachable at `base_url`
    /// (e.g. `http://localhost:3847`).
    pub async fn execute(
        &self,
        input: AskQuestionsInput,
        base_url: &str,
    ) -> Result<AskQuestionsOutput, AskQuestionsError> {
        input.validate()?;

        let AskQuestionsInput {
            title,
            context,
            questions,
        } = input;

        let session = self
            .store
            .create(questions.clone(), title, context)
            .await;
        let url = format!("{}/session/{}", base_url.trim_end_matches('/'), session.id());

        info!("Question form available at {}", url);
        self.announcer.announce(&url);

        if let Err(e) = self.browser.open(&url).await {
            warn!(
                "Could not open browser automatically ({}). Please open the URL manually.",
                e
            );
        }

        let deadline = Instant::now() + self.params.timeout;
        loop {
            if let Some(current) = self.store.get(session.id()).await {
                if let Some(answers) = current.answers() {
                    let answers = answers.clone();
                    self.store.delete(session.id()).await;
                    debug!(
                        "Session {} answered ({} entries)",
                        session.id(),
                        answers.len()
                    );
                    let summary = format_summary(&questions, &answers);
                    return Ok(AskQuestionsOutput {
                        outcome: AskOutcome::Completed,
                        summary,
                        answers,
                    });
                }
            }

            if Instant::now() >= deadline {
                self.store.delete(session.id()).await;
                info!("Session {} timed out without a submission", session.id());
                return Ok(AskQuestionsOutput {
                    outcome: AskOutcome::TimedOut,
                    summary: self.timeout_message(),
                    answers: AnswerMap::new(),
                });
            }

            tokio::time::sleep(self.params.poll_interval).await;
        }
    }

    fn timeout_message(&self) -> String {
        let minutes = self.params.timeout.as_secs_f64() / 60.0;
        format!(
            "Timeout: User did not submit answers within {} minutes.",
            minutes
        )
    }
}
