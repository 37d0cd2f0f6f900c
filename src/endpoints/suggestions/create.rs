use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;

use crate::{error::ApiError, state::AppState};

#[utoipa::path(
    post,
    path = "/v1/suggestions",
    operation_id = "v1/suggestions/create",
    responses(
        (status = 200, description = "the stored suggestion with its assigned id"),
        (status = 400, description = "body is not a JSON object"),
        (status = 500, description = "suggestion could not be stored"),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let Value::Object(mut fields) = payload else {
        return Err(ApiError::BadRequest(
            "suggestion must be a JSON object".to_owned(),
        ));
    };

    // the store assigns ids
    fields.remove("id");

    let suggestion = state
        .data
        .suggestions
        .insert(fields)
        .await
        .map_err(ApiError::Storage)?;

    Ok(Json(suggestion))
}
