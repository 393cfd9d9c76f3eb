//! Domain service - business logic orchestration

use super::events::{EventPublisher, RecordEvent};
use super::repository::{DuplicateKey, LogoStorage, RslRepository, StaffRepository, UploadError};
use super::{table_view, validation};
use crate::contract::{
    LogoUpload, NewRsl, NewStaff, Rsl, RslPatch, ShelterError, Staff, StaffColumn, StaffPatch,
    TablePage, TableQuery,
};
use std::sync::Arc;
use uuid::Uuid;

const RSL: &str = "RSL";
const STAFF: &str = "Staff member";

/// Domain service for RSL and staff records
pub struct Service {
    rsl_repo: Arc<dyn RslRepository>,
    staff_repo: Arc<dyn StaffRepository>,
    logos: Arc<dyn LogoStorage>,
    event_publisher: Arc<dyn EventPublisher>,
    default_rows_per_page: u32,
}

/// Log a storage failure and collapse it into `ShelterError::Internal`
fn internal(context: &'static str) -> impl FnOnce(anyhow::Error) -> ShelterError {
    move |error| {
        tracing::error!(error = ?error, "{context}");
        ShelterError::Internal
    }
}

/// Like [`internal`], but a unique-index rejection becomes a conflict.
/// The index is the last word when two writers pass the lookup together.
fn staff_write(context: &'static str) -> impl FnOnce(anyhow::Error) -> ShelterError {
    move |error| match error.downcast::<DuplicateKey>() {
        Ok(DuplicateKey(detail)) => {
            tracing::info!(detail = %detail, "{context}: duplicate staff record");
            ShelterError::conflict("employee id or email is already in use")
        }
        Err(error) => internal(context)(error),
    }
}

impl Service {
    /// Create a new service instance
    pub fn new(
        rsl_repo: Arc<dyn RslRepository>,
        staff_repo: Arc<dyn StaffRepository>,
        logos: Arc<dyn LogoStorage>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            rsl_repo,
            staff_repo,
            logos,
            event_publisher,
            default_rows_per_page: crate::contract::ROWS_PER_PAGE_OPTIONS[0],
        }
    }

    /// Page size used when a listing does not specify one
    pub fn with_default_rows_per_page(mut self, rows_per_page: u32) -> Self {
        self.default_rows_per_page = rows_per_page;
        self
    }

    pub fn default_rows_per_page(&self) -> u32 {
        self.default_rows_per_page
    }

    // ===== RSL Operations =====

    pub async fn create_rsl(
        &self,
        input: NewRsl,
        logo: Option<LogoUpload>,
    ) -> Result<Rsl, ShelterError> {
        let input = validation::normalize_new_rsl(input)?;

        let logo_path = match &logo {
            Some(upload) => Some(self.store_logo(upload).await?),
            None => None,
        };

        let now = chrono::Utc::now();
        let rsl = Rsl {
            id: Uuid::new_v4(),
            name: input.name,
            registration_number: input.registration_number,
            email: input.email,
            phone_number: input.phone_number,
            address: input.address,
            website: input.website,
            logo: logo_path,
            created_at: now,
            updated_at: now,
        };

        let created = match self.rsl_repo.create(&rsl).await {
            Ok(created) => created,
            Err(e) => {
                // Don't leave an orphaned upload behind.
                if let Some(path) = &rsl.logo {
                    self.discard_logo(path).await;
                }
                return Err(internal("failed to create RSL")(e));
            }
        };

        tracing::info!(id = %created.id, name = %created.name, has_logo = created.logo.is_some(), "RSL created");
        self.publish(RecordEvent::rsl_created(&created)).await;
        Ok(created)
    }

    pub async fn list_rsls(&self) -> Result<Vec<Rsl>, ShelterError> {
        let rsls = self
            .rsl_repo
            .list_all()
            .await
            .map_err(internal("failed to list RSLs"))?;
        tracing::debug!(count = rsls.len(), "listed RSLs");
        Ok(rsls)
    }

    pub async fn get_rsl(&self, id: Uuid) -> Result<Rsl, ShelterError> {
        self.rsl_repo
            .find_by_id(id)
            .await
            .map_err(internal("failed to load RSL"))?
            .ok_or_else(|| ShelterError::not_found(RSL, id))
    }

    /// Update an RSL.
    ///
    /// The record must exist before any file is written. A new logo is stored
    /// under a fresh name; the previous file is removed only after the record
    /// points at the new one.
    pub async fn update_rsl(
        &self,
        id: Uuid,
        patch: RslPatch,
        logo: Option<LogoUpload>,
    ) -> Result<Rsl, ShelterError> {
        let mut rsl = self.get_rsl(id).await?;
        validation::apply_rsl_patch(&mut rsl, patch)?;

        let previous_logo = match &logo {
            Some(upload) => {
                let path = self.store_logo(upload).await?;
                rsl.logo.replace(path)
            }
            None => None,
        };
        rsl.updated_at = chrono::Utc::now();

        let updated = match self.rsl_repo.update(&rsl).await {
            Ok(updated) => updated,
            Err(e) => {
                if logo.is_some() {
                    if let Some(path) = &rsl.logo {
                        self.discard_logo(path).await;
                    }
                }
                return Err(internal("failed to update RSL")(e));
            }
        };

        if let Some(old) = previous_logo {
            self.discard_logo(&old).await;
        }

        tracing::info!(id = %updated.id, logo_replaced = logo.is_some(), "RSL updated");
        self.publish(RecordEvent::rsl_updated(&updated)).await;
        Ok(updated)
    }

    /// Delete an RSL together with its logo file
    pub async fn delete_rsl(&self, id: Uuid) -> Result<(), ShelterError> {
        let rsl = self.get_rsl(id).await?;

        let deleted = self
            .rsl_repo
            .delete(id)
            .await
            .map_err(internal("failed to delete RSL"))?;
        if !deleted {
            return Err(ShelterError::not_found(RSL, id));
        }

        if let Some(path) = &rsl.logo {
            self.discard_logo(path).await;
        }

        tracing::info!(id = %id, "RSL deleted");
        self.publish(RecordEvent::rsl_deleted(&rsl)).await;
        Ok(())
    }

    // ===== Staff Operations =====

    pub async fn create_staff(&self, input: NewStaff) -> Result<Staff, ShelterError> {
        let input = validation::normalize_new_staff(input)?;
        self.ensure_unique_staff(&input.employee_id, &input.email, None)
            .await?;

        let now = chrono::Utc::now();
        let staff = Staff {
            id: Uuid::new_v4(),
            employee_id: input.employee_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            department: input.department,
            position: input.position,
            joining_date: input.joining_date,
            status: input.status,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .staff_repo
            .create(&staff)
            .await
            .map_err(staff_write("failed to create staff member"))?;

        tracing::info!(id = %created.id, employee_id = %created.employee_id, "staff member created");
        self.publish(RecordEvent::staff_created(&created)).await;
        Ok(created)
    }

    /// Search, sort and paginate the staff directory
    pub async fn list_staff(
        &self,
        query: TableQuery<StaffColumn>,
    ) -> Result<TablePage<Staff>, ShelterError> {
        validation::validate_table_query(&query)?;

        let rows = self
            .staff_repo
            .list_all()
            .await
            .map_err(internal("failed to list staff"))?;

        let page = table_view::apply(rows, &query);
        tracing::debug!(
            search = %query.search,
            page = page.page,
            total_entries = page.total_entries,
            "listed staff"
        );
        Ok(page)
    }

    pub async fn get_staff(&self, id: Uuid) -> Result<Staff, ShelterError> {
        self.staff_repo
            .find_by_id(id)
            .await
            .map_err(internal("failed to load staff member"))?
            .ok_or_else(|| ShelterError::not_found(STAFF, id))
    }

    pub async fn update_staff(&self, id: Uuid, patch: StaffPatch) -> Result<Staff, ShelterError> {
        let mut staff = self.get_staff(id).await?;
        validation::apply_staff_patch(&mut staff, patch)?;
        self.ensure_unique_staff(&staff.employee_id, &staff.email, Some(id))
            .await?;
        staff.updated_at = chrono::Utc::now();

        let updated = self
            .staff_repo
            .update(&staff)
            .await
            .map_err(staff_write("failed to update staff member"))?;

        tracing::info!(id = %updated.id, "staff member updated");
        self.publish(RecordEvent::staff_updated(&updated)).await;
        Ok(updated)
    }

    pub async fn delete_staff(&self, id: Uuid) -> Result<(), ShelterError> {
        let staff = self.get_staff(id).await?;

        let deleted = self
            .staff_repo
            .delete(id)
            .await
            .map_err(internal("failed to delete staff member"))?;
        if !deleted {
            return Err(ShelterError::not_found(STAFF, id));
        }

        tracing::info!(id = %id, "staff member deleted");
        self.publish(RecordEvent::staff_deleted(&staff)).await;
        Ok(())
    }

    // ===== Helper Methods =====

    /// Employee ids and emails are unique across the directory
    async fn ensure_unique_staff(
        &self,
        employee_id: &str,
        email: &str,
        current: Option<Uuid>,
    ) -> Result<(), ShelterError> {
        let is_other = |found: &Option<Staff>| {
            found
                .as_ref()
                .is_some_and(|s| Some(s.id) != current)
        };

        let by_employee_id = self
            .staff_repo
            .find_by_employee_id(employee_id)
            .await
            .map_err(internal("failed to check employee id"))?;
        if is_other(&by_employee_id) {
            return Err(ShelterError::conflict(format!(
                "employee id '{employee_id}' is already in use"
            )));
        }

        let by_email = self
            .staff_repo
            .find_by_email(email)
            .await
            .map_err(internal("failed to check staff email"))?;
        if is_other(&by_email) {
            return Err(ShelterError::conflict(format!(
                "email '{email}' is already in use"
            )));
        }

        Ok(())
    }

    async fn store_logo(&self, upload: &LogoUpload) -> Result<String, ShelterError> {
        self.logos
            .store(&upload.file_name, &upload.content)
            .await
            .map_err(|e| match e {
                UploadError::Io(io) => {
                    tracing::error!(error = %io, file_name = %upload.file_name, "failed to store logo");
                    ShelterError::Internal
                }
                rejected => ShelterError::Upload {
                    message: rejected.to_string(),
                },
            })
    }

    /// Best-effort removal; a missing or unremovable file is only logged
    async fn discard_logo(&self, public_path: &str) {
        match self.logos.remove(public_path).await {
            Ok(true) => tracing::debug!(path = %public_path, "removed logo"),
            Ok(false) => tracing::debug!(path = %public_path, "logo already gone"),
            Err(e) => tracing::warn!(path = %public_path, error = %e, "failed to remove logo"),
        }
    }

    async fn publish(&self, event: RecordEvent) {
        if let Err(e) = self.event_publisher.publish(event).await {
            tracing::warn!(error = %e, "failed to publish record event");
        }
    }
}
