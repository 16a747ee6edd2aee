//! Error types for switchyard crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchyardError {
    #[error("Core error: {0}")]
    Core(#[from] switchyard_core::CoreError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SwitchyardError>;
