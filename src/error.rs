use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Could not determine the program directory: {0}")]
    ProgramDirectory(#[source] std::io::Error),

    #[error("Could not create directory {path:?}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {path:?}")]
    PermissionDenied { path: PathBuf },

    #[error("Not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Download failed: {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Download failed: {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Decompression failed: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("Could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse grouping of [`FetchError`] variants by the stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Program location or output directory problems.
    Environment,
    /// DNS, connection, TLS or HTTP status failures.
    Network,
    /// The response body is not a valid gzip stream.
    Stream,
    /// The destination file could not be written.
    Io,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::ProgramDirectory(_)
            | FetchError::CreateDirectory { .. }
            | FetchError::PermissionDenied { .. }
            | FetchError::NotADirectory { .. } => ErrorCategory::Environment,
            FetchError::Client(_) | FetchError::Request { .. } | FetchError::Status { .. } => {
                ErrorCategory::Network
            }
            FetchError::Decompress(_) => ErrorCategory::Stream,
            FetchError::Write { .. } => ErrorCategory::Io,
        }
    }

    pub fn write_error<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        FetchError::Write {
            path: path.into(),
            source,
        }
    }
}
