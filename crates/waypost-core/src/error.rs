use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid content type id: {0}")]
    InvalidContentTypeId(String),
    #[error("content type already registered: {0}")]
    AlreadyRegistered(String),
}

/// Errors produced by `SettingsStore` backends.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("settings backend unavailable: {0}")]
    Unavailable(String),
    #[error("settings read failed: {0}")]
    Read(String),
    #[error("settings write failed: {0}")]
    Write(String),
    #[error("stored settings are invalid: {0}")]
    InvalidData(String),
}
