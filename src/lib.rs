use std::time::Duration;

use axum::{
    Router,
    extract::MatchedPath,
    response::Response,
    routing::{get, patch, post},
};
use http::{HeaderValue, Method, header};
use state::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, endpoints::*};

pub mod client;
pub mod config;
pub mod data;
pub mod endpoints;
pub mod error;
pub mod geo;
mod services;
pub mod state;
pub mod views;

pub fn app(state: AppState) -> Router {
    let v1_suggestions = Router::new()
        .route("/", get(suggestions::query).post(suggestions::create))
        .route("/{id}", get(suggestions::get).put(suggestions::update));

    let v1_categories = Router::new().route("/", get(categories::query));

    let v1_stakeholders = Router::new().route("/query", post(stakeholders::query));

    let v1_accounts = Router::new()
        .route("/", get(accounts::query))
        .route("/{id}/roles", patch(accounts::update_roles));

    let v1 = Router::new()
        .nest("/suggestions", v1_suggestions)
        .nest("/categories", v1_categories)
        .nest("/stakeholders", v1_stakeholders)
        .nest("/accounts", v1_accounts)
        .route("/openapi.json", get(openapi));

    let routes = Router::new()
        .nest("/v1", v1)
        .route("/health", get(health_check))
        .layer(cors(&state.config))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<axum::body::Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or("{unknown}");

                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        route = matched_path,
                        status = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response, latency: Duration, span: &tracing::Span| {
                    span.record("status", response.status().as_u16());
                    tracing::debug!(?latency, "finished");
                }),
        );

    Router::new().nest("/api", routes)
}

fn cors(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::OPTIONS,
            Method::HEAD,
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_ENCODING,
            header::ACCEPT_LANGUAGE,
        ]);

    match config.front_base_url.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(err) => {
            tracing::warn!("invalid front_base_url, cors disabled: {err}");
            cors
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
