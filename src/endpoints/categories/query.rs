use anyhow::Context;
use axum::{Json, extract::State, response::IntoResponse};

use crate::{data::Category, error::ApiError, state::AppState};

#[utoipa::path(
    get,
    path = "/v1/categories",
    operation_id = "v1/categories/query",
    responses(
        (status = 200, body = Vec<Category>),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn query(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .data
        .categories
        .select_all()
        .await
        .context("error querying categories")?;

    Ok(Json(categories))
}
