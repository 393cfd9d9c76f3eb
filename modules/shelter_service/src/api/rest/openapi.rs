//! OpenAPI document for the REST surface

use super::{dto, handlers};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "ShelterConnect API"),
    paths(
        handlers::create_rsl,
        handlers::list_rsls,
        handlers::get_rsl,
        handlers::update_rsl,
        handlers::delete_rsl,
        handlers::create_staff,
        handlers::list_staff,
        handlers::get_staff,
        handlers::update_staff,
        handlers::delete_staff,
    ),
    components(schemas(
        dto::RslDto,
        dto::StaffDto,
        dto::CreateStaffRequest,
        dto::UpdateStaffRequest,
        dto::PageInfoDto,
    )),
    tags(
        (name = "rsl", description = "Registered social landlords"),
        (name = "staff", description = "Staff directory"),
    )
)]
pub struct ApiDoc;

/// `GET /api/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
