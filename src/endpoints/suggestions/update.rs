use axum::{extract::Path, response::IntoResponse};

use crate::error::ApiError;

/// Suggestions cannot be edited until accounts can own them; the route exists so
/// clients get a definite answer instead of a 405.
#[utoipa::path(
    put,
    path = "/v1/suggestions/{id}",
    operation_id = "v1/suggestions/update",
    params(
        ("id" = String, description = "suggestion id"),
    ),
    responses(
        (status = 501, description = "not implemented"),
    )
)]
#[tracing::instrument]
pub async fn update(Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    Err::<(), _>(ApiError::NotImplemented(
        "suggestion update is not implemented".to_owned(),
    ))
}
