use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod pricing;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: resource routes, operation-named routes, pricing and docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let resource = Router::new()
        .route("/users", post(users::create))
        .route("/users/:id", get(users::get).put(users::update).delete(users::delete));

    // Operation-named routes taking the id as a query parameter
    let operations = Router::new()
        .route("/create", post(users::create))
        .route("/get", get(users::get_by_query))
        .route("/update", put(users::update_by_query))
        .route("/delete", delete(users::delete_by_query));

    let public = Router::new()
        .route("/health", get(health))
        .route("/pricing/quote", post(pricing::quote))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(resource)
        .merge(operations)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and friends
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
