//! REST DTOs with serde derives for HTTP API
//!
//! Field names are camelCase and ids are exposed as `_id`, the shape the
//! admin frontend consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Envelope =====

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Paging counters, only on table listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfoDto>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            page: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_page(mut self, page: PageInfoDto) -> Self {
        self.page = Some(page);
        self
    }
}

impl ApiResponse<()> {
    /// Success without a payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            page: None,
        }
    }
}

/// Table paging counters ("Showing X to Y of Z entries")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoDto {
    pub page: u32,
    pub rows_per_page: u32,
    pub total_pages: u32,
    pub total_entries: usize,
    pub showing_from: usize,
    pub showing_to: usize,
}

// ===== RSL DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RslDto {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[schema(example = "Riverside Housing Association")]
    pub name: String,

    pub registration_number: Option<String>,

    pub email: Option<String>,

    pub phone_number: Option<String>,

    pub address: Option<String>,

    pub website: Option<String>,

    /// Public path of the logo image, null when none was uploaded
    #[schema(example = "/uploads/0b6f7f2e-6a55-4d7e-9c1e-6f3f1b1b9d41.png")]
    pub logo: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

// ===== Staff DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[schema(example = "EMP-0042")]
    pub employee_id: String,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone_number: Option<String>,

    pub department: String,

    pub position: String,

    #[schema(example = "2024-03-18")]
    pub joining_date: NaiveDate,

    #[schema(example = "Active")]
    pub status: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Create staff request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffRequest {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
    /// Active, Inactive or On Leave (defaults to Active)
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "Active".to_string()
}

/// Update staff request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffRequest {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Query parameters for the staff table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStaffQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Column key, e.g. `lastName` or `joiningDate`
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` (default) or `desc`
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, alias = "rows_per_page")]
    pub rows_per_page: Option<u32>,
}
