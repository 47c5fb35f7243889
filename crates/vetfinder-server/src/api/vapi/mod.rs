//! Voice-assistant webhooks. These are called cross-origin, so every response
//! (errors included) carries permissive CORS headers and each route answers
//! an `OPTIONS` preflight.

mod function_call;
mod tool_call;
mod tool_calls;

use axum::{
    http::{header, HeaderValue},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use super::AppState;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "POST, GET, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/vapi/nearby-vets",
            post(function_call::function_call).options(preflight),
        )
        .route(
            "/api/vapi/tool-call",
            post(tool_call::tool_call).options(preflight),
        )
        .route(
            "/api/vapi/tool-calls",
            post(tool_calls::tool_calls).options(preflight),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static(ALLOW_ORIGIN),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static(ALLOW_METHODS),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static(ALLOW_HEADERS),
                )),
        )
}

async fn preflight() -> Json<Value> {
    Json(json!({}))
}
