//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! the `ASKFORM_*` environment overrides.

use crate::web::server::PORT_RANGE_START;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [server]
/// port = 3847
///
/// [wait]
/// timeout_ms = 600000
/// poll_interval_ms = 500
///
/// [browser]
/// auto_open = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Listener settings
    pub server: FileServerConfig,
    /// Wait loop settings
    pub wait: FileWaitConfig,
    /// Browser auto-open settings
    pub browser: FileBrowserConfig,
}

/// Listener configuration (`[server]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Preferred listen port; the fixed range 3847-3947 is scanned when
    /// this one is occupied
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            port: PORT_RANGE_START,
        }
    }
}

/// Wait loop configuration (`[wait]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWaitConfig {
    /// Submission deadline in milliseconds
    pub timeout_ms: u64,
    /// Poll interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for FileWaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 600_000,
            poll_interval_ms: 500,
        }
    }
}

/// Browser configuration (`[browser]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBrowserConfig {
    /// Open the form URL automatically when a session starts
    pub auto_open: bool,
}

impl Default for FileBrowserConfig {
    fn default() -> Self {
        Self { auto_open: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.server.port, 3847);
        assert_eq!(config.wait.timeout_ms, 600_000);
        assert_eq!(config.wait.poll_interval_ms, 500);
        assert!(config.browser.auto_open);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [wait]
            timeout_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.wait.timeout_ms, 1000);
        assert_eq!(config.wait.poll_interval_ms, 500);
        assert_eq!(config.server.port, 3847);
    }
}
