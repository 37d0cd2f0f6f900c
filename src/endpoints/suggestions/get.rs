use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::ApiError, state::AppState};

#[utoipa::path(
    get,
    path = "/v1/suggestions/{id}",
    operation_id = "v1/suggestions/get",
    params(
        ("id" = String, description = "suggestion id"),
    ),
    responses(
        (status = 200, description = "the suggestion, or null when there is none"),
        (status = 500, description = "suggestion could not be read"),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let suggestion = state
        .data
        .suggestions
        .select_by_id(&id)
        .await
        .map_err(ApiError::Storage)?;

    Ok(Json(suggestion))
}
