//! Error types for the training pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrainError>;

#[derive(Error, Debug)]
pub enum TrainError {
    #[error("Data error: {0}")]
    Data(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    Shape { expected: String, actual: String },

    #[error("Model is not fitted")]
    NotFitted,

    #[error("Tracking error: {0}")]
    Tracking(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
