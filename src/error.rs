#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid reference data: {0}")]
    InvalidData(String),

    #[error("Daily draw quota of {quota} exhausted")]
    QuotaExhausted { quota: u32 },

    #[error("Background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, AlmanacError>;
