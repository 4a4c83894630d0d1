use thiserror::Error;

// Errors raised by the tracker library.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("IO error: {0:#}")]
    Io(#[from] std::io::Error), // Input/output errors from the file store or settings.

    #[error("Serialization error: {0:#}")]
    Serialization(#[from] serde_json::Error), // Errors related to data serialization.

    #[error("Unknown action: {0}")]
    UnknownAction(String), // The action is not part of the catalog.

    #[error("Unknown task: {0}")]
    UnknownTask(String), // The task is not part of the daily list.

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to get home directory")]
    NoHomeDirectory,
}

pub type Result<T> = std::result::Result<T, TrackerError>;
