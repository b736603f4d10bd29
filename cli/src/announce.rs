//! Console URL announcement.

use askform_application::SessionAnnouncer;
use colored::Colorize;

/// Prints the form URL banner to stderr, where it stays visible in agent
/// transcripts without polluting the structured stdout output.
pub struct ConsoleAnnouncer;

impl SessionAnnouncer for ConsoleAnnouncer {
    fn announce(&self, url: &str) {
        eprintln!();
        eprintln!(
            "  {} {}",
            "Answer questions at:".cyan().bold(),
            url.underline()
        );
        eprintln!();
    }
}
