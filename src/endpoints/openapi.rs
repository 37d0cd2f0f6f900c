use axum::Json;
use utoipa::OpenApi;

use crate::endpoints;

#[derive(utoipa::OpenApi)]
#[openapi(paths(
    endpoints::suggestions::query::query,
    endpoints::suggestions::get::get,
    endpoints::suggestions::create::create,
    endpoints::suggestions::update::update,
    endpoints::categories::query::query,
    endpoints::stakeholders::query::query,
    endpoints::accounts::query::query,
    endpoints::accounts::update_roles::update_roles
))]
struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
