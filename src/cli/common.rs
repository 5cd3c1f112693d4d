//! Shared CLI error type and exit codes.

use std::path::Path;
use thiserror::Error;

use crate::config::Config;
use crate::models::ScreenInstance;
use crate::parser::load_screen;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was readable but failed validation
    Validation = 1,
    /// A file couldn't be read, written, or parsed
    Io = 2,
    /// Bad command-line usage
    Usage = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The payload or config failed validation.
    #[error("{0}")]
    Validation(String),
    /// Reading, writing or parsing failed.
    #[error("{0}")]
    Io(String),
    /// The arguments didn't make sense.
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::Validation,
            Self::Io(_) => ExitCode::Io,
            Self::Usage(_) => ExitCode::Usage,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Formats an `anyhow` error with its full context chain.
pub(crate) fn describe(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

/// Loads the user's configuration.
pub(crate) fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {}", describe(&e))))
}

/// Loads a screen payload, mapping failures to I/O errors.
pub(crate) fn read_screen(path: &Path) -> CliResult<ScreenInstance> {
    load_screen(path).map_err(|e| CliError::io(describe(&e)))
}

/// Pretty-prints a value as JSON.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}
