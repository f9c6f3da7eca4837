use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use journal_core::ContentError;

use crate::views;

/// Handler error, rendered as a plain HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(msg) => {
                tracing::debug!("Not found: {msg}");
                StatusCode::NOT_FOUND
            }
            ApiError::Content(err) if err.is_not_found() => {
                tracing::debug!("Not found: {err}");
                StatusCode::NOT_FOUND
            }
            ApiError::Content(err) => {
                tracing::error!("Content error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            [(header::CACHE_CONTROL, "no-store")],
            Html(views::error_page(status)),
        )
            .into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
