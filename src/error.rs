use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransferError>;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{kind}: {message}")]
    Rejection { kind: String, message: String },
    #[error("a transfer for demand {demand_id} is already in flight")]
    SubmissionInFlight { demand_id: String },
}
