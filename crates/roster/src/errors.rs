use thiserror::Error;

/// Errors raised while reading or writing the persisted players collection.
///
/// Generation itself never fails; these only surface at the persistence
/// boundary, where there is no recovery path and callers should treat them
/// as fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
