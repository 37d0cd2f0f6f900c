use anyhow::Context;
use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{data::Stakeholder, error::ApiError, geo::Point, services, state::AppState};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderQueryInput {
    pub name: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Radius in miles around `latitude`/`longitude`.
    pub distance: Option<f64>,
}

#[utoipa::path(
    post,
    path = "/v1/stakeholders/query",
    operation_id = "v1/stakeholders/query",
    request_body(
        content = StakeholderQueryInput,
        content_type = "application/json",
    ),
    responses(
        (status = 200, body = Vec<Stakeholder>),
        (status = 400),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn query(
    State(state): State<AppState>,
    Json(input): Json<StakeholderQueryInput>,
) -> Result<impl IntoResponse, ApiError> {
    if input.distance.is_some_and(|d| d < 0.0) {
        return Err(ApiError::BadRequest(
            "distance must not be negative".to_owned(),
        ));
    }

    let origin = match (input.latitude, input.longitude) {
        (Some(latitude), Some(longitude)) => Some(Point::new(latitude, longitude)),
        (None, None) => None,
        _ => {
            return Err(ApiError::BadRequest(
                "latitude and longitude must be given together".to_owned(),
            ));
        }
    };

    let stakeholders = services::stakeholders::query(
        &state.data,
        input.name.as_deref(),
        &input.category_ids,
        origin,
        input.distance,
    )
    .await
    .context("error querying stakeholders")?;

    Ok(Json(stakeholders))
}
