//! Browser launcher port.
//!
//! The wait loop opens the form URL in the user's browser on a best-effort
//! basis. Launch failure is never fatal: the URL is always announced
//! separately so the user can open it by hand.
//!
//! # Built-in Implementations
//!
//! - [`NoBrowserLauncher`] - never opens anything (`--no-open`, tests)
//!
//! For the real thing, see `SystemBrowserLauncher` in the infrastructure
//! layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from attempting to open the browser.
#[derive(Error, Debug, Clone)]
pub enum BrowserLaunchError {
    /// The opener command could not be spawned or exited non-zero.
    #[error("Failed to launch browser: {0}")]
    SpawnFailed(String),

    /// No known opener command for this platform.
    #[error("No browser opener available on this platform")]
    UnsupportedPlatform,
}

/// Port for opening a URL in the user's browser.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Open `url` in the default browser.
    async fn open(&self, url: &str) -> Result<(), BrowserLaunchError>;
}

/// Launcher that never opens a browser.
///
/// Used when auto-open is suppressed and in tests.
pub struct NoBrowserLauncher;

#[async_trait]
impl BrowserLauncher for NoBrowserLauncher {
    async fn open(&self, _url: &str) -> Result<(), BrowserLaunchError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_browser_launcher_is_a_no_op() {
        let launcher = NoBrowserLauncher;
        assert!(launcher.open("http://localhost:3847/session/x").await.is_ok());
    }
}
