//! Error types for switchyard-cli

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<switchyard::CoreError> for CliError {
    fn from(e: switchyard::CoreError) -> Self {
        CliError::Core(e.to_string())
    }
}

impl From<switchyard::SwitchyardError> for CliError {
    fn from(e: switchyard::SwitchyardError) -> Self {
        CliError::Core(e.to_string())
    }
}
