use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),

    #[error("failed to build program: {0}")]
    Build(String),

    #[error("program error: {0}")]
    Program(String),
}

pub type Result<T> = std::result::Result<T, Error>;
