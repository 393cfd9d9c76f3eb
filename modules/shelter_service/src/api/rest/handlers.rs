//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, ApiError},
    multipart::RslForm,
};
use crate::contract::{NewStaff, StaffPatch};
use crate::domain::Service;
use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Multipart, Path, Query,
    },
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

// ===== RSL Handlers =====

/// Create an RSL from a multipart form with an optional `logo` file
#[utoipa::path(
    post,
    path = "/api/rsl",
    tag = "rsl",
    description = "multipart/form-data with text fields and an optional `logo` file",
    responses(
        (status = 201, description = "RSL created"),
        (status = 400, description = "Validation error or invalid logo upload"),
    )
)]
pub async fn create_rsl(
    Extension(service): Extension<Arc<Service>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<ApiResponse<RslDto>>), ApiError> {
    let form = RslForm::from_multipart(multipart?).await?;
    let (input, logo) = form.into_new_rsl();

    let rsl = service
        .create_rsl(input, logo)
        .await
        .map_err(|e| map_domain_error(e, "creating RSL"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(rsl.into()).with_message("RSL created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/rsl",
    tag = "rsl",
    responses((status = 200, description = "All RSLs, newest first"))
)]
pub async fn list_rsls(Extension(service): Extension<Arc<Service>>) -> ApiResult<Vec<RslDto>> {
    let rsls = service
        .list_rsls()
        .await
        .map_err(|e| map_domain_error(e, "fetching RSLs"))?;

    Ok(Json(ApiResponse::data(
        rsls.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/rsl/{id}",
    tag = "rsl",
    params(
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "The RSL"),
        (status = 404, description = "RSL not found"),
    )
)]
pub async fn get_rsl(
    Extension(service): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<RslDto> {
    let Path(id) = id?;
    let rsl = service
        .get_rsl(id)
        .await
        .map_err(|e| map_domain_error(e, "fetching RSL"))?;

    Ok(Json(ApiResponse::data(rsl.into())))
}

/// Update an RSL; a submitted `logo` replaces the stored one
#[utoipa::path(
    put,
    path = "/api/rsl/{id}",
    tag = "rsl",
    description = "multipart/form-data; submitted fields and `logo` replace the stored ones",
    params(
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "RSL updated"),
        (status = 400, description = "Validation error or invalid logo upload"),
        (status = 404, description = "RSL not found"),
    )
)]
pub async fn update_rsl(
    Extension(service): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<RslDto> {
    let Path(id) = id?;
    let form = RslForm::from_multipart(multipart?).await?;
    let (patch, logo) = form.into_patch();

    let rsl = service
        .update_rsl(id, patch, logo)
        .await
        .map_err(|e| map_domain_error(e, "updating RSL"))?;

    Ok(Json(
        ApiResponse::data(rsl.into()).with_message("RSL updated successfully"),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/rsl/{id}",
    tag = "rsl",
    params(
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "RSL and its logo deleted"),
        (status = 404, description = "RSL not found"),
    )
)]
pub async fn delete_rsl(
    Extension(service): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    service
        .delete_rsl(id)
        .await
        .map_err(|e| map_domain_error(e, "deleting RSL"))?;

    Ok(Json(ApiResponse::<()>::message("RSL deleted successfully")))
}

// ===== Staff Handlers =====

#[utoipa::path(
    post,
    path = "/api/staff",
    tag = "staff",
    request_body = CreateStaffRequest,
    responses(
        (status = 201, description = "Staff member created"),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Employee id or email already in use"),
    )
)]
pub async fn create_staff(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<CreateStaffRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<StaffDto>>), ApiError> {
    let Json(req) = body?;
    let input = NewStaff::try_from(req)?;

    let staff = service
        .create_staff(input)
        .await
        .map_err(|e| map_domain_error(e, "creating staff member"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(staff.into()).with_message("Staff member created successfully")),
    ))
}

/// Staff table: search, sort and paginate
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = "staff",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring over the visible columns"),
        ("sort" = Option<String>, Query, description = "Column key, e.g. `lastName`"),
        ("direction" = Option<String>, Query, description = "`asc` or `desc`"),
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("rowsPerPage" = Option<u32>, Query, description = "Page size"),
    ),
    responses(
        (status = 200, description = "One page of staff with paging info"),
        (status = 400, description = "Invalid table query"),
    )
)]
pub async fn list_staff(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<ListStaffQuery>, QueryRejection>,
) -> ApiResult<Vec<StaffDto>> {
    let Query(query) = query?;
    let query = query.into_table_query(service.default_rows_per_page())?;

    let page = service
        .list_staff(query)
        .await
        .map_err(|e| map_domain_error(e, "fetching staff"))?;

    let info = PageInfoDto::from(&page);
    let rows = page.rows.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::data(rows).with_page(info)))
}

#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    tag = "staff",
    params(
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "The staff member"),
        (status = 404, description = "Staff member not found"),
    )
)]
pub async fn get_staff(
    Extension(service): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StaffDto> {
    let Path(id) = id?;
    let staff = service
        .get_staff(id)
        .await
        .map_err(|e| map_domain_error(e, "fetching staff member"))?;

    Ok(Json(ApiResponse::data(staff.into())))
}

#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    tag = "staff",
    request_body = UpdateStaffRequest,
    params(
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Staff member updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Staff member not found"),
        (status = 409, description = "Employee id or email already in use"),
    )
)]
pub async fn update_staff(
    Extension(service): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateStaffRequest>, JsonRejection>,
) -> ApiResult<StaffDto> {
    let Path(id) = id?;
    let Json(req) = body?;
    let patch = StaffPatch::try_from(req)?;

    let staff = service
        .update_staff(id, patch)
        .await
        .map_err(|e| map_domain_error(e, "updating staff member"))?;

    Ok(Json(
        ApiResponse::data(staff.into()).with_message("Staff member updated successfully"),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    tag = "staff",
    params(
        ("id" = Uuid, Path, description = "Record id"),
    ),
    responses(
        (status = 200, description = "Staff member deleted"),
        (status = 404, description = "Staff member not found"),
    )
)]
pub async fn delete_staff(
    Extension(service): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    service
        .delete_staff(id)
        .await
        .map_err(|e| map_domain_error(e, "deleting staff member"))?;

    Ok(Json(ApiResponse::<()>::message("Staff member deleted successfully")))
}
