// SPDX-License-Identifier: Apache-2.0

//! Error types for the Habitica client.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during Habitica operations.
#[derive(Error, Debug)]
pub enum HabiticaError {
    /// The API returned a non-success status code.
    #[error("Habitica API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message, taken from the response body when available.
        message: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration file error (missing file, missing field, bad TOML).
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// A task-id expression could not be parsed.
    #[error("Invalid task id expression: {token}")]
    TaskId {
        /// The offending token.
        token: String,
    },

    /// A task index referred past the end of the task list.
    #[error("Task index {index} out of bounds for list of {len}")]
    IndexOutOfBounds {
        /// Zero-based index that was requested.
        index: usize,
        /// Length of the list at the time of the request.
        len: usize,
    },

    /// A response was missing a field the client needs.
    #[error("Unexpected response shape: missing {path}")]
    UnexpectedShape {
        /// Dotted path of the missing field.
        path: String,
    },

    /// A post-mutation invariant did not hold; the local snapshot can no
    /// longer be trusted.
    #[error("Server state inconsistency: {message}")]
    Inconsistency {
        /// Description of the violated invariant.
        message: String,
    },

    /// The quest cache file could not be read or written.
    #[error("Quest cache error: {message}")]
    Cache {
        /// Error message.
        message: String,
    },
}

impl From<config::ConfigError> for HabiticaError {
    fn from(err: config::ConfigError) -> Self {
        HabiticaError::Config {
            message: err.to_string(),
        }
    }
}
