use axum::{
    Json,
    response::{IntoResponse, Response},
};
use hyper::StatusCode;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),

    /// A persistence failure whose message is handed back to the caller.
    #[error("storage error: {0:#}")]
    Storage(anyhow::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{:#?}", self);

        let (status_code, error_message) = match self {
            ApiError::UnexpectedError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unexpected error".to_string(),
            ),
            ApiError::Storage(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}")),
            ApiError::NotFound(err) => (StatusCode::NOT_FOUND, err),
            ApiError::BadRequest(err) => (StatusCode::BAD_REQUEST, err),
            ApiError::NotImplemented(err) => (StatusCode::NOT_IMPLEMENTED, err),
        };

        return (status_code, Json(json!({ "error": error_message }))).into_response();
    }
}

