// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Presto error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External program ran and reported failure.
    #[error("{program} failed ({})", describe_code(.code))]
    CommandFailed { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl Error {
    /// Process exit code for this error.
    ///
    /// A failed external command propagates its own exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => ExitCode::from(self) as i32,
        }
    }
}

/// Result type using presto Error
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Build and tests passed
    Success = 0,
    /// An external command failed without an exit code of its own
    CommandFailed = 1,
    /// Configuration error (clap also exits 2 on usage errors)
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::Spawn { .. } => ExitCode::InternalError,
            Error::CommandFailed { .. } => ExitCode::CommandFailed,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
