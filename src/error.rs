use thiserror::Error;

#[derive(Debug, Error)]
pub enum CraveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Decoder backend rejected the request: {0}")]
    RemoteRejected(String),

    #[error("No healthier alternatives found")]
    NoAlternativesFound,
}

pub type Result<T> = std::result::Result<T, CraveError>;
