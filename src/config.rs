use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Editor behavior settings (paging, raw-mode read timeout)
    #[serde(default)]
    pub editor: EditorConfig,

    /// Tracing filter directive for the log file (e.g. "info", "led=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file location (default: `led-<pid>.log` in the system temp dir)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Editor behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of single-line moves a PageUp/PageDown key performs
    #[serde(default = "default_page_scroll_rows")]
    pub page_scroll_rows: usize,

    /// Raw-mode read timeout (VTIME), in deciseconds
    #[serde(default = "default_read_timeout_deciseconds")]
    pub read_timeout_deciseconds: u8,
}

fn default_page_scroll_rows() -> usize {
    10
}

fn default_read_timeout_deciseconds() -> u8 {
    1
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            page_scroll_rows: default_page_scroll_rows(),
            read_timeout_deciseconds: default_read_timeout_deciseconds(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration")
    }
}
