//! Input validation and normalization for record fields

use crate::contract::{NewRsl, NewStaff, Rsl, RslPatch, ShelterError, Staff, StaffPatch};
use crate::contract::{TableQuery, ROWS_PER_PAGE_OPTIONS};

/// Upper bound for any single text field
pub const MAX_FIELD_LEN: usize = 200;

/// Trim a required field and reject blank or oversized values
pub fn required(field: &str, value: &str) -> Result<String, ShelterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ShelterError::validation(format!("{field} is required")));
    }
    check_len(field, trimmed)?;
    Ok(trimmed.to_string())
}

/// Trim an optional field; blank becomes `None`
pub fn optional(field: &str, value: Option<&str>) -> Result<Option<String>, ShelterError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => {
            check_len(field, v)?;
            Ok(Some(v.to_string()))
        }
    }
}

fn check_len(field: &str, value: &str) -> Result<(), ShelterError> {
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ShelterError::validation(format!(
            "{field} must be at most {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(())
}

/// Basic address check: exactly one '@' with non-empty text on both sides and
/// no whitespace. Returns the lower-cased address.
pub fn email(field: &str, value: &str) -> Result<String, ShelterError> {
    let value = required(field, value)?.to_lowercase();
    let invalid = || ShelterError::validation(format!("{field} '{value}' is not a valid email"));

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || value.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(value)
}

fn optional_email(field: &str, value: Option<&str>) -> Result<Option<String>, ShelterError> {
    match optional(field, value)? {
        Some(v) => Ok(Some(email(field, &v)?)),
        None => Ok(None),
    }
}

// ===== RSL =====

pub fn normalize_new_rsl(input: NewRsl) -> Result<NewRsl, ShelterError> {
    Ok(NewRsl {
        name: required("name", &input.name)?,
        registration_number: optional("registrationNumber", input.registration_number.as_deref())?,
        email: optional_email("email", input.email.as_deref())?,
        phone_number: optional("phoneNumber", input.phone_number.as_deref())?,
        address: optional("address", input.address.as_deref())?,
        website: optional("website", input.website.as_deref())?,
    })
}

/// Apply a patch to an RSL in place, validating each present field
pub fn apply_rsl_patch(rsl: &mut Rsl, patch: RslPatch) -> Result<(), ShelterError> {
    if let Some(name) = patch.name {
        rsl.name = required("name", &name)?;
    }
    if let Some(v) = patch.registration_number {
        rsl.registration_number = optional("registrationNumber", Some(&v))?;
    }
    if let Some(v) = patch.email {
        rsl.email = optional_email("email", Some(&v))?;
    }
    if let Some(v) = patch.phone_number {
        rsl.phone_number = optional("phoneNumber", Some(&v))?;
    }
    if let Some(v) = patch.address {
        rsl.address = optional("address", Some(&v))?;
    }
    if let Some(v) = patch.website {
        rsl.website = optional("website", Some(&v))?;
    }
    Ok(())
}

// ===== Staff =====

pub fn normalize_new_staff(input: NewStaff) -> Result<NewStaff, ShelterError> {
    Ok(NewStaff {
        employee_id: required("employeeId", &input.employee_id)?,
        first_name: required("firstName", &input.first_name)?,
        last_name: required("lastName", &input.last_name)?,
        email: email("email", &input.email)?,
        phone_number: optional("phoneNumber", input.phone_number.as_deref())?,
        department: required("department", &input.department)?,
        position: required("position", &input.position)?,
        joining_date: input.joining_date,
        status: input.status,
    })
}

pub fn apply_staff_patch(staff: &mut Staff, patch: StaffPatch) -> Result<(), ShelterError> {
    if let Some(v) = patch.employee_id {
        staff.employee_id = required("employeeId", &v)?;
    }
    if let Some(v) = patch.first_name {
        staff.first_name = required("firstName", &v)?;
    }
    if let Some(v) = patch.last_name {
        staff.last_name = required("lastName", &v)?;
    }
    if let Some(v) = patch.email {
        staff.email = email("email", &v)?;
    }
    if let Some(v) = patch.phone_number {
        staff.phone_number = optional("phoneNumber", Some(&v))?;
    }
    if let Some(v) = patch.department {
        staff.department = required("department", &v)?;
    }
    if let Some(v) = patch.position {
        staff.position = required("position", &v)?;
    }
    if let Some(v) = patch.joining_date {
        staff.joining_date = v;
    }
    if let Some(v) = patch.status {
        staff.status = v;
    }
    Ok(())
}

// ===== Table view =====

pub fn validate_table_query<C>(query: &TableQuery<C>) -> Result<(), ShelterError> {
    if query.page == 0 {
        return Err(ShelterError::validation("page must be 1 or greater"));
    }
    if !ROWS_PER_PAGE_OPTIONS.contains(&query.rows_per_page) {
        return Err(ShelterError::validation(format!(
            "rowsPerPage must be one of {ROWS_PER_PAGE_OPTIONS:?}, got {}",
            query.rows_per_page
        )));
    }
    Ok(())
}
