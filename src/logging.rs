// Logging goes to a file: stdout and stderr belong to the TUI while it runs.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

pub const LOG_FILE_ENV: &str = "SORTVIS_LOG_FILE";
pub const LOG_FILTER_ENV: &str = "SORTVIS_LOG";

/// Install the fmt subscriber when `SORTVIS_LOG_FILE` names a file.
/// Returns the path logs are appended to, if any.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(path) = env::var_os(LOG_FILE_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    let filter = env::var(LOG_FILTER_ENV).unwrap_or_else(|_| "info".to_string());
    init_with(path, &filter).map(Some)
}

fn init_with(path: PathBuf, filter: &str) -> Result<PathBuf> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::LogFile {
            path: path.clone(),
            source,
        })?;
    let filter = EnvFilter::try_new(filter).map_err(|e| Error::Subscriber(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Subscriber(e.to_string()))?;
    Ok(path)
}
