//! Tracing setup for the `docsweep` binary.
//!
//! Events are appended to `docsweep.log` under the XDG state directory. When
//! that file cannot be opened the CLI falls back to [`init_logging_stderr`].
//! `DOCSWEEP_LOG` takes precedence over `RUST_LOG` for the filter.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,docsweep=debug,docsweep_core=debug";
const FILTER_ENV: &str = "DOCSWEEP_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/docsweep/docsweep.log`.
pub fn log_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("docsweep")?;
    Ok(log_file_in(&dirs.get_state_home()))
}

fn log_file_in(state_home: &Path) -> PathBuf {
    state_home.join("docsweep").join("docsweep.log")
}

/// Open `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Install the file subscriber. Err leaves no subscriber installed.
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!(
        log = %path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "docsweep started"
    );
    Ok(())
}

/// Install a stderr subscriber; a no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
