//! System browser launcher.
//!
//! Best-effort opener for the form URL. Failures are returned to the wait
//! loop, which logs them and keeps going; the URL is always announced
//! separately for manual use.

use askform_application::{BrowserLaunchError, BrowserLauncher};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Opens URLs through the platform's default opener command.
pub struct SystemBrowserLauncher;

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Result<Command, BrowserLaunchError> {
    let mut command = Command::new("open");
    command.arg(url);
    Ok(command)
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Result<Command, BrowserLaunchError> {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(url);
    Ok(command)
}

#[cfg(target_os = "linux")]
fn opener(url: &str) -> Result<Command, BrowserLaunchError> {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Ok(command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
fn opener(_url: &str) -> Result<Command, BrowserLaunchError> {
    Err(BrowserLaunchError::UnsupportedPlatform)
}

#[async_trait]
impl BrowserLauncher for SystemBrowserLauncher {
    async fn open(&self, url: &str) -> Result<(), BrowserLaunchError> {
        let mut command = opener(url)?;
        debug!("Opening browser for {}", url);

        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| BrowserLaunchError::SpawnFailed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(BrowserLaunchError::SpawnFailed(format!(
                "opener exited with {}",
                status
            )))
        }
    }
}
