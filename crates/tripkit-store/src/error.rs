use thiserror::Error;

/// Errors raised by the saved-items store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed items file: {0}")]
    Malformed(#[from] serde_json::Error),
}
