//! Error types

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// mysql-probe error type
#[derive(Debug, Error)]
pub enum Error {
    /// Server or network rejected the connection attempt
    ///
    /// Covers unreachable hosts, authentication failures, unknown databases,
    /// and anything else the MySQL client reports while opening a session.
    #[error("connection to {target} failed: {source}")]
    Connection {
        /// `user@host:port/database` of the attempt (never includes the password)
        target: String,
        /// Underlying client diagnostic
        #[source]
        source: mysql_async::Error,
    },

    /// Connection was not established within the configured timeout
    #[error("connection to {target} timed out after {}s", .timeout.as_secs_f64())]
    ConnectTimeout {
        /// `user@host:port/database` of the attempt
        target: String,
        /// Configured connect timeout
        timeout: Duration,
    },

    /// Invalid or missing configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Config file could not be parsed
    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigFile {
        /// Path of the offending file
        path: PathBuf,
        /// TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Handle used in a state that does not allow the operation
    #[error("invalid state: expected {expected}, got {actual}")]
    InvalidState {
        /// Expected state
        expected: String,
        /// Actual state
        actual: String,
    },
}

impl Error {
    /// Stable label for metrics and logs
    pub fn category(&self) -> &'static str {
        match self {
            Error::Connection { source, .. } => match source {
                mysql_async::Error::Server(_) => "server",
                mysql_async::Error::Io(_) => "network",
                mysql_async::Error::Driver(_) => "driver",
                _ => "client",
            },
            Error::ConnectTimeout { .. } => "timeout",
            Error::Config(_) | Error::ConfigFile { .. } => "config",
            Error::Io(_) => "io",
            Error::InvalidState { .. } => "state",
        }
    }

    /// Whether the error was raised while talking to the server
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Error::Connection { .. } | Error::ConnectTimeout { .. }
        )
    }

    /// Whether the error stems from configuration rather than the server
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::ConfigFile { .. })
    }
}
