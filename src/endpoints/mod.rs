mod openapi;
pub use openapi::*;

pub mod suggestions;

pub mod categories;

pub mod stakeholders;

pub mod accounts;

#[cfg(test)]
pub(crate) mod testing {
    use axum::{
        Router,
        body::{Body, to_bytes},
    };
    use http::{Method, Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{app, config::Config, data::Data, state::AppState};

    pub fn router(data: Data) -> Router {
        let config = Config {
            database_url: "postgres://unused".to_owned(),
            front_base_url: "http://localhost:3000".to_owned(),
            port: 8000,
        };

        app(AppState::new(config, data))
    }

    pub async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        };

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .expect("request");

        let response = router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, json)
    }
}
