//! Configuration loading.
//!
//! - [`file_config::FileConfig`] — raw TOML structure with defaults
//! - [`loader::ConfigLoader`] — multi-source merging (files + environment)

pub mod file_config;
pub mod loader;

pub use file_config::{FileBrowserConfig, FileConfig, FileServerConfig, FileWaitConfig};
pub use loader::ConfigLoader;
