//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{rsl, staff};
use crate::contract::{Rsl, Staff, StaffStatus};

// ===== RSL Conversions =====

impl From<rsl::Model> for Rsl {
    fn from(entity: rsl::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            registration_number: entity.registration_number,
            email: entity.email,
            phone_number: entity.phone_number,
            address: entity.address,
            website: entity.website,
            logo: entity.logo,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&Rsl> for rsl::ActiveModel {
    fn from(model: &Rsl) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            registration_number: Set(model.registration_number.clone()),
            email: Set(model.email.clone()),
            phone_number: Set(model.phone_number.clone()),
            address: Set(model.address.clone()),
            website: Set(model.website.clone()),
            logo: Set(model.logo.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Staff Conversions =====

impl TryFrom<staff::Model> for Staff {
    type Error = anyhow::Error;

    fn try_from(entity: staff::Model) -> Result<Self, Self::Error> {
        let status: StaffStatus = entity
            .status
            .parse()
            .map_err(|e: String| anyhow::anyhow!("staff {}: {e}", entity.id))?;

        Ok(Self {
            id: entity.id,
            employee_id: entity.employee_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_number: entity.phone_number,
            department: entity.department,
            position: entity.position,
            joining_date: entity.joining_date,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&Staff> for staff::ActiveModel {
    fn from(model: &Staff) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            employee_id: Set(model.employee_id.clone()),
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            email: Set(model.email.clone()),
            phone_number: Set(model.phone_number.clone()),
            department: Set(model.department.clone()),
            position: Set(model.position.clone()),
            joining_date: Set(model.joining_date),
            status: Set(model.status.as_str().to_string()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}
