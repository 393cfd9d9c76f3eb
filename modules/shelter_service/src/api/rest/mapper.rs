//! Conversions between REST DTOs and contract models

use super::dto::*;
use super::error::ApiError;
use crate::contract::{
    self, NewStaff, SortConfig, SortDirection, StaffColumn, StaffPatch, StaffStatus, TablePage,
    TableQuery,
};

// ===== RSL conversions =====

impl From<contract::Rsl> for RslDto {
    fn from(rsl: contract::Rsl) -> Self {
        Self {
            id: rsl.id,
            name: rsl.name,
            registration_number: rsl.registration_number,
            email: rsl.email,
            phone_number: rsl.phone_number,
            address: rsl.address,
            website: rsl.website,
            logo: rsl.logo,
            created_at: rsl.created_at,
            updated_at: rsl.updated_at,
        }
    }
}

// ===== Staff conversions =====

impl From<contract::Staff> for StaffDto {
    fn from(staff: contract::Staff) -> Self {
        Self {
            id: staff.id,
            employee_id: staff.employee_id,
            first_name: staff.first_name,
            last_name: staff.last_name,
            email: staff.email,
            phone_number: staff.phone_number,
            department: staff.department,
            position: staff.position,
            joining_date: staff.joining_date,
            status: staff.status.to_string(),
            created_at: staff.created_at,
            updated_at: staff.updated_at,
        }
    }
}

fn parse_status(raw: &str) -> Result<StaffStatus, ApiError> {
    raw.parse().map_err(ApiError::bad_request)
}

impl TryFrom<CreateStaffRequest> for NewStaff {
    type Error = ApiError;

    fn try_from(req: CreateStaffRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_status(&req.status)?,
            employee_id: req.employee_id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone_number: req.phone_number,
            department: req.department,
            position: req.position,
            joining_date: req.joining_date,
        })
    }
}

impl TryFrom<UpdateStaffRequest> for StaffPatch {
    type Error = ApiError;

    fn try_from(req: UpdateStaffRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            status: req.status.as_deref().map(parse_status).transpose()?,
            employee_id: req.employee_id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone_number: req.phone_number,
            department: req.department,
            position: req.position,
            joining_date: req.joining_date,
        })
    }
}

// ===== Table conversions =====

impl ListStaffQuery {
    /// Build a table query, filling unset paging from defaults
    pub fn into_table_query(
        self,
        default_rows_per_page: u32,
    ) -> Result<TableQuery<StaffColumn>, ApiError> {
        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(key) => {
                let key: StaffColumn = key.parse().map_err(ApiError::bad_request)?;
                let direction = match self.direction.as_deref() {
                    Some(d) => d.parse::<SortDirection>().map_err(ApiError::bad_request)?,
                    None => SortDirection::Asc,
                };
                Some(SortConfig { key, direction })
            }
        };

        Ok(TableQuery {
            search: self.search.unwrap_or_default(),
            sort,
            page: self.page.unwrap_or(1),
            rows_per_page: self.rows_per_page.unwrap_or(default_rows_per_page),
        })
    }
}

impl<T> From<&TablePage<T>> for PageInfoDto {
    fn from(page: &TablePage<T>) -> Self {
        Self {
            page: page.page,
            rows_per_page: page.rows_per_page,
            total_pages: page.total_pages,
            total_entries: page.total_entries,
            showing_from: page.showing_from,
            showing_to: page.showing_to,
        }
    }
}
