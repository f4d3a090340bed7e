// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `HabiticaError` and adds a hint for the
//! error classes a user can act on. Structured error data stays in the
//! library; presentation lives here.

use anyhow::Error;
use habitica_core::HabiticaError;

/// Formats an error for CLI display with a helpful hint where one exists.
///
/// If the error is not a `HabiticaError`, returns the original message.
#[must_use]
pub fn format_error(error: &Error) -> String {
    if let Some(hbt_err) = error.downcast_ref::<HabiticaError>() {
        match hbt_err {
            HabiticaError::Config { .. } => {
                format!(
                    "{hbt_err}\n\nTip: Check your config file at {}",
                    habitica_core::config_file_path().display()
                )
            }
            HabiticaError::Api { status: 401, .. } => {
                format!(
                    "{hbt_err}\n\nTip: Check `auth.user_id` and `auth.api_key` in {}",
                    habitica_core::config_file_path().display()
                )
            }
            HabiticaError::Network(_) => {
                format!("{hbt_err}\n\nTip: Check your internet connection and try again.")
            }
            HabiticaError::TaskId { .. } => {
                format!(
                    "{hbt_err}\n\nTip: Task ids look like `3`, `1,2,3` or `1-3,4 8`."
                )
            }
            HabiticaError::Inconsistency { .. } => {
                format!(
                    "{hbt_err}\n\nNothing further was changed. Re-run the command to \
                     start from a fresh snapshot."
                )
            }
            _ => hbt_err.to_string(),
        }
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_points_at_the_config_file() {
        let err = anyhow::Error::new(HabiticaError::Config {
            message: "missing `auth.api_key`".to_string(),
        });
        let formatted = format_error(&err);
        assert!(formatted.contains("missing `auth.api_key`"));
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn unauthorized_hints_at_credentials() {
        let err = anyhow::Error::new(HabiticaError::Api {
            status: 401,
            message: "invalid credentials".to_string(),
        });
        assert!(format_error(&err).contains("auth.api_key"));
    }

    #[test]
    fn other_api_errors_pass_through() {
        let err = anyhow::Error::new(HabiticaError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        let formatted = format_error(&err);
        assert!(formatted.contains("boom"));
        assert!(!formatted.contains("Tip:"));
    }

    #[test]
    fn task_id_errors_show_the_expected_shape() {
        let err = anyhow::Error::new(HabiticaError::TaskId {
            token: "two".to_string(),
        });
        assert!(format_error(&err).contains("1-3,4"));
    }

    #[test]
    fn non_habitica_errors_are_untouched() {
        let err = anyhow::anyhow!("Some generic error");
        assert_eq!(format_error(&err), "Some generic error");
    }
}
