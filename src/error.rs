//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Each variant corresponds to one failure kind of the crop operation and keeps
//! the offending path plus the underlying I/O or decoder error as its source.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found")]
    NotFound { path: PathBuf },

    #[error("cannot read file: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported or corrupt image: {source}")]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Coarse classification of an [`Error`], stable enough to branch on.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Unreadable,
    UnsupportedFormat,
    Write,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unreadable => "unreadable",
            ErrorKind::UnsupportedFormat => "unsupported_format",
            ErrorKind::Write => "write",
        };
        write!(f, "{}", s)
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Unreadable { .. } => ErrorKind::Unreadable,
            Error::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Error::Write { .. } => ErrorKind::Write,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::NotFound { path }
            | Error::Unreadable { path, .. }
            | Error::UnsupportedFormat { path, .. }
            | Error::Write { path, .. } => path,
        }
    }

    /// Map a failed read of `path`, splitting out the not-found case.
    pub(crate) fn from_read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn write_io(path: &Path, source: std::io::Error) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(source),
        }
    }
}
