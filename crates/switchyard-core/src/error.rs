//! Error types for switchyard-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Handler error: {0}")]
    Handler(String),

    #[error("State error: {0}")]
    State(String),

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
