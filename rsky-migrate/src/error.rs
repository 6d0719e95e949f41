//! Error types for the migration guide

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid asset dimensions for {path}: {width}x{height}")]
    InvalidDimensions {
        path: String,
        width: u32,
        height: u32,
    },

    #[error("Asset path must be absolute: {0}")]
    InvalidAssetPath(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
