//! CLI command implementations for Ricochet.

pub(crate) mod board;
pub(crate) mod config;
pub(crate) mod play;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Output format for the `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// One JSON object per notification.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ricochet::config::ConfigError> for CliError {
    fn from(e: ricochet::config::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ricochet::BoardError> for CliError {
    fn from(e: ricochet::BoardError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ricochet::board::UnknownSetup> for CliError {
    fn from(e: ricochet::board::UnknownSetup) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ricochet::session::SessionError> for CliError {
    fn from(e: ricochet::session::SessionError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}
