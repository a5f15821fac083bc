// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Stagegate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file malformed, or a key unknown to both file and defaults
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A check whose failure cannot be remediated (syntax lint, test suite).
    #[error("{check} failed: {message}")]
    Fatal { check: String, message: String },

    /// Writing progress output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Config error for a key that is neither in the file nor in the defaults.
    pub fn unknown_key(key: &str, path: Option<PathBuf>) -> Self {
        Error::Config {
            message: format!("requested configuration key `{key}` is not defined"),
            path,
        }
    }
}

/// Result type using stagegate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Commit accepted
    Success = 0,
    /// Commit rejected (style violations remain)
    Rejected = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Syntax lint or test suite failed
    FatalCheck = 3,
    /// Internal error
    InternalError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Fatal { .. } => ExitCode::FatalCheck,
            Error::Io { .. } | Error::Output(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
