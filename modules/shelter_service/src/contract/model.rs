//! Contract models for the shelter service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ===== RSL =====

/// Registered Social Landlord record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsl {
    pub id: Uuid,
    pub name: String,
    pub registration_number: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    /// Public path of the stored logo (`/uploads/<uuid><ext>`)
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an RSL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRsl {
    pub name: String,
    pub registration_number: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

/// Partial update for an RSL.
///
/// `None` leaves a field untouched; `Some("")` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RslPatch {
    pub name: Option<String>,
    pub registration_number: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
}

/// Logo file received with a create or update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUpload {
    /// Client-side file name, only its extension is kept
    pub file_name: String,
    pub content: Bytes,
}

// ===== Staff =====

/// Employment status of a staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StaffStatus {
    Active,
    Inactive,
    OnLeave,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::Inactive => "Inactive",
            StaffStatus::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(StaffStatus::Active),
            "inactive" => Ok(StaffStatus::Inactive),
            "on leave" | "on_leave" | "onleave" => Ok(StaffStatus::OnLeave),
            other => Err(format!(
                "unknown staff status '{other}', expected Active, Inactive or On Leave"
            )),
        }
    }
}

/// Staff member record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    pub id: Uuid,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
    pub status: StaffStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a staff member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaff {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub department: String,
    pub position: String,
    pub joining_date: NaiveDate,
    pub status: StaffStatus,
}

/// Partial update for a staff member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffPatch {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// `Some("")` clears the phone number
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub status: Option<StaffStatus>,
}

/// Sortable columns of the staff table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffColumn {
    EmployeeId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Department,
    Position,
    JoiningDate,
    Status,
}

impl StaffColumn {
    pub const ALL: [StaffColumn; 9] = [
        StaffColumn::EmployeeId,
        StaffColumn::FirstName,
        StaffColumn::LastName,
        StaffColumn::Email,
        StaffColumn::PhoneNumber,
        StaffColumn::Department,
        StaffColumn::Position,
        StaffColumn::JoiningDate,
        StaffColumn::Status,
    ];

    /// Wire key used by the admin table (`employeeId`, `joiningDate`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            StaffColumn::EmployeeId => "employeeId",
            StaffColumn::FirstName => "firstName",
            StaffColumn::LastName => "lastName",
            StaffColumn::Email => "email",
            StaffColumn::PhoneNumber => "phoneNumber",
            StaffColumn::Department => "department",
            StaffColumn::Position => "position",
            StaffColumn::JoiningDate => "joiningDate",
            StaffColumn::Status => "status",
        }
    }
}

impl FromStr for StaffColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        StaffColumn::ALL
            .into_iter()
            .find(|column| column.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown sort column '{s}'"))
    }
}

// ===== Table view =====

/// Page sizes offered by the admin table
pub const ROWS_PER_PAGE_OPTIONS: [u32; 4] = [5, 10, 25, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Single-key sort applied to a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<C> {
    pub key: C,
    pub direction: SortDirection,
}

impl<C: Copy + PartialEq> SortConfig<C> {
    /// Header click: the active ascending key flips to descending,
    /// anything else starts ascending.
    pub fn toggle(current: Option<SortConfig<C>>, key: C) -> SortConfig<C> {
        let direction = match current {
            Some(cfg) if cfg.key == key && cfg.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        SortConfig { key, direction }
    }
}

/// Search, sort and page request for a table view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery<C> {
    pub search: String,
    pub sort: Option<SortConfig<C>>,
    /// 1-based page number
    pub page: u32,
    pub rows_per_page: u32,
}

impl<C> Default for TableQuery<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

/// One page of a filtered and sorted table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage<T> {
    pub rows: Vec<T>,
    pub page: u32,
    pub rows_per_page: u32,
    pub total_pages: u32,
    /// Rows matching the search, across all pages
    pub total_entries: usize,
    /// 1-based index of the first row shown (0 when nothing matched)
    pub showing_from: usize,
    pub showing_to: usize,
}
