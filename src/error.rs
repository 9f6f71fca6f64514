// src/error.rs
use line_tally_engine::config::{ConfigBuilderError, ScanOptionsBuilderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] line_tally_engine::EngineError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ConfigBuilderError> for AppError {
    fn from(e: ConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<ScanOptionsBuilderError> for AppError {
    fn from(e: ScanOptionsBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
