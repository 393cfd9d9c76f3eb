//! HTTP application assembly

use crate::config::ServerConfig;
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use shelter_service::ShelterServiceModule;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Health route, module routes and the shared middleware stack
pub fn build_router(
    server: &ServerConfig,
    module: &ShelterServiceModule,
    db: Arc<DatabaseConnection>,
) -> Result<Router> {
    let router = Router::new().route("/health", get(move || health(db.clone())));
    let router = module.register_rest(router)?;

    let cors = if server.cors_allow_any {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Ok(router
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::new(server.request_timeout))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}

async fn health(db: Arc<DatabaseConnection>) -> impl IntoResponse {
    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "success": true, "message": "ok" })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "message": "Database unavailable",
                    "error": e.to_string()
                })),
            )
        }
    }
}
