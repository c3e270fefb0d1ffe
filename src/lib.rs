//! Stathlete - terminal fitness tracker
//!
//! Account login and signup against a JSON credential file, a profile intake
//! form, a home dashboard with recent activity, a workout timer and a
//! post-workout questionnaire.

use std::path::PathBuf;

use crate::app::state::Screen;

// Public re-exports
pub mod activity;
pub mod app;
pub mod config;
pub mod store;
pub mod util;
pub mod workout;

// Common error types
#[derive(Debug, thiserror::Error)]
pub enum StathleteError {
    /// Credential file could not be read, parsed or written
    #[error("Credential store unavailable at {}: {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },
    /// Signup with an identifier that is already registered
    #[error("Identifier already registered: {0}")]
    AlreadyExists(String),
    /// Login with an unknown identifier or a wrong secret
    #[error("Authentication failed")]
    AuthenticationFailed,
    /// Workout start with no workout type chosen
    #[error("No workout type selected")]
    InvalidSelection,
    /// Trigger that the current screen does not accept
    #[error("'{trigger}' is not available on the {screen} screen")]
    InvalidTransition {
        screen: Screen,
        trigger: &'static str,
    },
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Activity provider failure
    #[error("Activity unavailable: {0}")]
    ActivityUnavailable(String),
    /// I/O operation failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for StathleteError {
    fn from(err: toml::de::Error) -> Self {
        StathleteError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for StathleteError {
    fn from(err: toml::ser::Error) -> Self {
        StathleteError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for Stathlete operations
pub type Result<T> = std::result::Result<T, StathleteError>;

/// Error handling utilities
pub mod error {
    use super::StathleteError;

    /// Whether the user can simply correct their input and try again.
    ///
    /// Nothing is retried automatically; this only drives how the screen
    /// presents the failure.
    pub fn is_recoverable(error: &StathleteError) -> bool {
        match error {
            StathleteError::AlreadyExists(_)
            | StathleteError::AuthenticationFailed
            | StathleteError::InvalidSelection
            | StathleteError::InvalidTransition { .. }
            | StathleteError::ActivityUnavailable(_) => true,

            StathleteError::StorageUnavailable { .. }
            | StathleteError::ConfigError(_)
            | StathleteError::IoError(_) => false,
        }
    }

    /// Convert error to the message shown on the triggering screen
    pub fn user_friendly_message(error: &StathleteError) -> String {
        match error {
            StathleteError::StorageUnavailable { .. } => {
                "Something went wrong. Your account data could not be accessed.".to_string()
            }
            StathleteError::AlreadyExists(_) => "Username already exists".to_string(),
            StathleteError::AuthenticationFailed => "Invalid login".to_string(),
            StathleteError::InvalidSelection => "Choose a workout type first".to_string(),
            StathleteError::InvalidTransition { .. } => {
                "That action is not available here".to_string()
            }
            StathleteError::ActivityUnavailable(_) => "Activity unavailable".to_string(),
            StathleteError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "stathlete";
pub const CONFIG_FILE: &str = "stathlete.toml";
pub const USER_DB: &str = "users.json";
pub const LOG_FILE: &str = "stathlete.log";
