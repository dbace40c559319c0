use std::io;

use thiserror::Error;

use crate::engine::EngineError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Report error: {0}")]
    Report(#[from] IoError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}
