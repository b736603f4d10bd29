//! Session URL announcement port.
//!
//! The wait loop blocks the calling agent, so the form URL has to reach the
//! human before the loop starts. Adapters decide how: the CLI prints a
//! banner to stderr; tests usually plug in [`NoAnnouncer`].

/// Port for surfacing the form URL to the human.
pub trait SessionAnnouncer: Send + Sync {
    /// Called once, after the session exists and before the wait loop runs.
    fn announce(&self, url: &str);
}

/// Announcer that stays silent (tests, embedding callers that handle the
/// URL themselves).
pub struct NoAnnouncer;

impl SessionAnnouncer for NoAnnouncer {
    fn announce(&self, _url: &str) {}
}
