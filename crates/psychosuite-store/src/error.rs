use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("client not found: {0}")]
    ClientNotFound(String),

    #[error("result not found: {0}")]
    ResultNotFound(String),

    #[error("invalid backup: {0}")]
    InvalidBackup(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
