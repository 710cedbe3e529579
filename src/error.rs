// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteLintError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to launch linter `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The direct child was killed. Processes it spawned itself (e.g. `node`
    /// under `npx`) are not tracked and may keep running.
    #[error("Linter timed out after {secs}s on {path}")]
    Timeout { path: PathBuf, secs: u64 },

    #[error("Invalid linter command `{0}`")]
    InvalidCommand(String),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Directory walk failed: {0}")]
    Walk(String),
}

pub type Result<T> = std::result::Result<T, SiteLintError>;

impl SiteLintError {
    /// Wraps an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to SiteLintError::Io with unknown path.
impl From<std::io::Error> for SiteLintError {
    fn from(source: std::io::Error) -> Self {
        SiteLintError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for SiteLintError {
    fn from(e: walkdir::Error) -> Self {
        SiteLintError::Walk(e.to_string())
    }
}
