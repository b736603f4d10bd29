//! Application-level configuration.
//!
//! [`WaitParams`] groups the static parameters that control the wait loop in
//! [`AskQuestionsUseCase`](crate::use_cases::ask_questions::AskQuestionsUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wait loop control parameters.
///
/// The loop re-reads the session every `poll_interval` and gives up after
/// `timeout`, measured from loop start. Timeout is a normal terminal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitParams {
    /// Maximum time to wait for a submission before timing out.
    pub timeout: Duration,
    /// Interval between session re-reads.
    pub poll_interval: Duration,
}

impl Default for WaitParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(600),
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl WaitParams {
    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Construct from millisecond values, as read from configuration.
    pub fn from_millis(timeout_ms: u64, poll_interval_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }
}
