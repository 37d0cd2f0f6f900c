use anyhow::Context;
use axum::{Json, extract::State, response::IntoResponse};

use crate::{data::Account, error::ApiError, state::AppState};

#[utoipa::path(
    get,
    path = "/v1/accounts",
    operation_id = "v1/accounts/query",
    responses(
        (status = 200, body = Vec<Account>),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn query(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let accounts = state
        .data
        .accounts
        .select_all()
        .await
        .context("error querying accounts")?;

    Ok(Json(accounts))
}
