use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::ApiError, state::AppState};

#[utoipa::path(
    get,
    path = "/v1/suggestions",
    operation_id = "v1/suggestions/query",
    responses(
        (status = 200, description = "every stored suggestion"),
        (status = 404, description = "suggestions could not be read"),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn query(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    // storage failures answer 404 on this route
    let suggestions = state
        .data
        .suggestions
        .select_all()
        .await
        .map_err(|err| ApiError::NotFound(format!("{err:#}")))?;

    Ok(Json(suggestions))
}
