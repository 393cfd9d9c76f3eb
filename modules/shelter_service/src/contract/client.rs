//! Native client trait for inter-module communication
//!
//! Other modules talk to the shelter service through this trait.
//! NO HTTP - direct function calls.

use super::{
    error::ShelterError,
    model::{
        LogoUpload, NewRsl, NewStaff, Rsl, RslPatch, Staff, StaffColumn, StaffPatch, TablePage,
        TableQuery,
    },
};
use async_trait::async_trait;
use uuid::Uuid;

/// Shelter service API for inter-module communication
#[async_trait]
pub trait ShelterApi: Send + Sync {
    // ===== RSL Operations =====

    /// Create an RSL, storing its logo when one is supplied
    async fn create_rsl(&self, rsl: NewRsl, logo: Option<LogoUpload>)
        -> Result<Rsl, ShelterError>;

    /// List all RSLs, newest first
    async fn list_rsls(&self) -> Result<Vec<Rsl>, ShelterError>;

    async fn get_rsl(&self, id: Uuid) -> Result<Rsl, ShelterError>;

    /// Update an RSL; a new logo replaces (and removes) the previous file
    async fn update_rsl(
        &self,
        id: Uuid,
        patch: RslPatch,
        logo: Option<LogoUpload>,
    ) -> Result<Rsl, ShelterError>;

    async fn delete_rsl(&self, id: Uuid) -> Result<(), ShelterError>;

    // ===== Staff Operations =====

    async fn create_staff(&self, staff: NewStaff) -> Result<Staff, ShelterError>;

    /// Search, sort and paginate the staff directory
    async fn list_staff(
        &self,
        query: TableQuery<StaffColumn>,
    ) -> Result<TablePage<Staff>, ShelterError>;

    async fn get_staff(&self, id: Uuid) -> Result<Staff, ShelterError>;

    async fn update_staff(&self, id: Uuid, patch: StaffPatch) -> Result<Staff, ShelterError>;

    async fn delete_staff(&self, id: Uuid) -> Result<(), ShelterError>;
}
