use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordBuilderError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Word list '{}' has no usable entries", .0.display())]
    EmptyWordList(PathBuf),
}

pub type WbResult<T> = Result<T, WordBuilderError>;
