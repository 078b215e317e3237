use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use waypost_core::StoreError;
use waypost_dispatch::DispatchError;

use crate::render;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown content type: {0}")]
    UnknownContentType(String),
    #[error("settings store error: {0}")]
    Store(#[from] StoreError),
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownContentType(_) => {
                (StatusCode::NOT_FOUND, render::not_found_page()).into_response()
            }
            AppError::Store(e) => {
                error!(error = %e, "settings store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
            AppError::Dispatch(e) => {
                error!(error = %e, "dispatch failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
