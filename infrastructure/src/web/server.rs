//! Web server lifecycle.
//!
//! Binds a localhost listener on the preferred port, scanning a fixed range
//! when occupied, and serves the router until shut down. Port exhaustion is
//! fatal at startup; nothing else here is.

use super::routes::{self, AppState};
use std::net::Ipv4Addr;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// First port tried when the preferred one is occupied.
pub const PORT_RANGE_START: u16 = 3847;
/// Last port tried.
pub const PORT_RANGE_END: u16 = 3947;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("No available ports found in range {PORT_RANGE_START}-{PORT_RANGE_END}")]
    PortExhausted,

    #[error("Failed to read listener address: {0}")]
    ListenerAddr(#[from] std::io::Error),
}

/// A running form server.
///
/// The listener task is spawned at startup and runs until
/// [`WebServer::shutdown`] cancels it. Localhost only.
pub struct WebServer {
    port: u16,
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl WebServer {
    /// Bind and start serving.
    ///
    /// Tries `preferred_port` first, then scans the fixed range. A
    /// `preferred_port` of 0 asks the OS for an ephemeral port (used by
    /// tests).
    pub async fn start(preferred_port: u16, state: AppState) -> Result<Self, WebServerError> {
        let listener = bind_available(preferred_port).await?;
        let port = listener.local_addr()?.port();

        let app = routes::router(state);
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            let serve = axum::serve(listener, app)
                .with_graceful_shutdown(async move { token.cancelled().await });
            if let Err(e) = serve.await {
                error!("Form server terminated: {}", e);
            }
        });

        info!("Form server listening at http://localhost:{}", port);
        Ok(Self {
            port,
            shutdown,
            handle,
        })
    }

    /// The port actually bound (relevant after a scan or port 0).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Base URL for building session links.
    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Stop serving and wait for the listener task to finish.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        let _ = self.handle.await;
    }
}

async fn try_bind(port: u16) -> Option<TcpListener> {
    TcpListener::bind((Ipv4Addr::LOCALHOST, port)).await.ok()
}

/// Find a free localhost listener, preferring `preferred`.
///
/// Scan order mirrors the preference: `preferred` first, then the range
/// from `max(PORT_RANGE_START, preferred)` upward, then the part of the
/// range below `preferred`.
async fn bind_available(preferred: u16) -> Result<TcpListener, WebServerError> {
    if let Some(listener) = try_bind(preferred).await {
        return Ok(listener);
    }

    let scan_start = PORT_RANGE_START.max(preferred);
    for port in scan_start..=PORT_RANGE_END {
        if port == preferred {
            continue;
        }
        if let Some(listener) = try_bind(port).await {
            return Ok(listener);
        }
    }

    if preferred > PORT_RANGE_START {
        for port in PORT_RANGE_START..=PORT_RANGE_END.min(preferred - 1) {
            if let Some(listener) = try_bind(port).await {
                return Ok(listener);
            }
        }
    }

    Err(WebServerError::PortExhausted)
}
