//! Log file setup
//!
//! The screen belongs to the editor while raw mode is on, so diagnostics go
//! to a plain-text file instead. Failing to open it never stops the editor.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const FALLBACK_LEVEL: &str = "info";

/// `<temp dir>/led-<pid>.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(format!("led-{}.log", std::process::id()))
}

/// Parse a level or filter directive, falling back to `info`
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install the global subscriber writing to `path`.
///
/// Returns the path actually logged to, or `None` if the file could not be
/// created or a subscriber was already installed.
pub fn init_global(path: &Path, level: &str) -> Option<PathBuf> {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("led: cannot create log file {}: {}", path.display(), e);
            return None;
        }
    };

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(level_filter(level))
        .try_init();

    match installed {
        Ok(()) => {
            tracing::info!("Logging to {}", path.display());
            Some(path.to_path_buf())
        }
        Err(_) => None,
    }
}
