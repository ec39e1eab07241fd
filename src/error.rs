use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse inventory JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write booking report: {0}")]
    ReportError(#[from] csv::Error),

    #[error("Invalid room inventory: {0}")]
    InvalidInventory(String),

    #[error("Unknown session action: '{0}' (expected book:<n>, randomize, reset or show)")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, Error>;
