//! Error types for Bli.

use thiserror::Error;

/// Library-level error type for Bli operations.
#[derive(Error, Debug)]
pub enum BliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool dispatch failed: {0}")]
    Dispatch(String),

    #[error("No task ID found in video generation response")]
    TaskIdMissing,

    #[error("Video generation timed out after {0} attempts")]
    GenerationTimeout(u32),

    #[error("Expected output file not found: {0}")]
    OutputMissing(String),

    #[error("Media combination failed: {0}")]
    Mux(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Bli operations.
pub type Result<T> = std::result::Result<T, BliError>;
