//! Error types for the launcher

use thiserror::Error;

/// General launcher error type
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Unknown username and wrong password are reported the same way
    #[error("Login rejected for '{username}'")]
    LoginRejected { username: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
