use thiserror::Error;
use waypost_core::StoreError;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("settings store error: {0}")]
    Store(#[from] StoreError),
}
