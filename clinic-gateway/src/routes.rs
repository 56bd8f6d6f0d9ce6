//! Top-level router: versioned API, health probe and fallback.

use std::sync::Arc;

use axum::{middleware, response::Response, routing::get, Router};
use clinic_core::{ActionUsecase, ServiceCode};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    actions,
    auth::{require_role, RoleGate},
    response::Responder,
};

const GATEWAY: Responder = Responder::new(ServiceCode::GATEWAY);

/// Build the application router.
///
/// Every route under `/v1` passes through the role gate; `/health` and the
/// not-found fallback do not.
pub fn create_router(usecase: Arc<dyn ActionUsecase>, gate: RoleGate) -> Router {
    let v1 = actions::router(usecase)
        .route_layer(middleware::from_fn_with_state(gate, require_role));

    Router::new()
        .nest("/v1", v1)
        .route("/health", get(health))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// `GET /health`: liveness probe.
pub async fn health() -> Response {
    GATEWAY.success(json!({"status": "ok"}), "service is healthy", "01")
}

/// Any unmatched route.
pub async fn fallback() -> Response {
    GATEWAY.not_found("route not found", "01")
}
