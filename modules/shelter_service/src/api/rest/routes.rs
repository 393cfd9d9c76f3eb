//! Route registration

use super::{handlers, openapi};
use crate::domain::Service;
use axum::{
    routing::get,
    Extension, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Register all REST routes plus the read-only `/uploads` file route
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    upload_dir: &Path,
) -> anyhow::Result<Router> {
    if !upload_dir.is_dir() {
        anyhow::bail!("upload directory {} does not exist", upload_dir.display());
    }

    let api = Router::new()
        // RSL endpoints
        .route(
            "/api/rsl",
            get(handlers::list_rsls).post(handlers::create_rsl),
        )
        .route(
            "/api/rsl/{id}",
            get(handlers::get_rsl)
                .put(handlers::update_rsl)
                .delete(handlers::delete_rsl),
        )
        // Staff endpoints
        .route(
            "/api/staff",
            get(handlers::list_staff).post(handlers::create_staff),
        )
        .route(
            "/api/staff/{id}",
            get(handlers::get_staff)
                .put(handlers::update_staff)
                .delete(handlers::delete_staff),
        )
        .route("/api/openapi.json", get(openapi::openapi_json))
        // Add service as extension for handlers
        .layer(Extension(service));

    let router = router
        .merge(api)
        .nest_service("/uploads", ServeDir::new(upload_dir));

    tracing::debug!(upload_dir = %upload_dir.display(), "shelter routes registered");
    Ok(router)
}
