use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{data::Account, error::ApiError, state::AppState};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRolesInput {
    pub is_admin: bool,
    pub is_security_admin: bool,
}

#[utoipa::path(
    patch,
    path = "/v1/accounts/{id}/roles",
    operation_id = "v1/accounts/update_roles",
    params(
        ("id" = i32, description = "account id"),
    ),
    request_body(
        content = UpdateRolesInput,
        content_type = "application/json",
    ),
    responses(
        (status = 200, body = Account),
        (status = 404),
    )
)]
#[tracing::instrument(skip(state))]
pub async fn update_roles(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRolesInput>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .data
        .accounts
        .update_roles(id, payload.is_admin, payload.is_security_admin)
        .await
        .context("error updating account roles")?
        .ok_or_else(|| ApiError::NotFound(format!("account {id}")))?;

    Ok(Json(account))
}

#[cfg(test)]
mod test {
    use http::{Method, StatusCode};
    use serde_json::json;

    use crate::{
        data::memory::{Memory, account},
        endpoints::testing::{router, send},
    };

    #[tokio::test]
    async fn grants_roles_and_lists_accounts() {
        let app = router(
            Memory::default()
                .with_accounts(vec![
                    account(1, "zoe@example.org", "Zoe", "Young"),
                    account(2, "adam@example.org", "Adam", "Baker"),
                ])
                .into_data(),
        );

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/api/v1/accounts/1/roles",
            Some(json!({ "isAdmin": true, "isSecurityAdmin": false })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isAdmin"], true);
        assert_eq!(body["isSecurityAdmin"], false);

        let (status, body) = send(&app, Method::GET, "/api/v1/accounts", None).await;
        assert_eq!(status, StatusCode::OK);
        let emails = body
            .as_array()
            .expect("array")
            .iter()
            .map(|a| a["email"].as_str().expect("email").to_owned())
            .collect::<Vec<_>>();
        assert_eq!(emails, vec!["adam@example.org", "zoe@example.org"]);
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let app = router(Memory::default().into_data());

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/v1/accounts/7/roles",
            Some(json!({ "isAdmin": true, "isSecurityAdmin": true })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
