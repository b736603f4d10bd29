//! Infrastructure layer for askform
//!
//! This crate contains adapters that implement the ports and repository
//! traits defined in the domain and application layers: the in-memory
//! session store, the localhost web server with the embedded form UI, the
//! system browser launcher, and configuration file loading.

pub mod browser;
pub mod config;
pub mod store;
pub mod web;

// Re-export commonly used types
pub use browser::SystemBrowserLauncher;
pub use config::{ConfigLoader, FileBrowserConfig, FileConfig, FileServerConfig, FileWaitConfig};
pub use store::InMemorySessionStore;
pub use web::{
    routes::AppState,
    server::{WebServer, WebServerError, PORT_RANGE_END, PORT_RANGE_START},
};
