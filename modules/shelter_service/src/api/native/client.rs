//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    LogoUpload, NewRsl, NewStaff, Rsl, RslPatch, ShelterApi, ShelterError, Staff, StaffColumn,
    StaffPatch, TablePage, TableQuery,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// Used by other modules in the same process, without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ShelterApi for NativeClient {
    async fn create_rsl(
        &self,
        input: NewRsl,
        logo: Option<LogoUpload>,
    ) -> Result<Rsl, ShelterError> {
        self.service.create_rsl(input, logo).await
    }

    async fn list_rsls(&self) -> Result<Vec<Rsl>, ShelterError> {
        self.service.list_rsls().await
    }

    async fn get_rsl(&self, id: Uuid) -> Result<Rsl, ShelterError> {
        self.service.get_rsl(id).await
    }

    async fn update_rsl(
        &self,
        id: Uuid,
        patch: RslPatch,
        logo: Option<LogoUpload>,
    ) -> Result<Rsl, ShelterError> {
        self.service.update_rsl(id, patch, logo).await
    }

    async fn delete_rsl(&self, id: Uuid) -> Result<(), ShelterError> {
        self.service.delete_rsl(id).await
    }

    async fn create_staff(&self, input: NewStaff) -> Result<Staff, ShelterError> {
        self.service.create_staff(input).await
    }

    async fn list_staff(
        &self,
        query: TableQuery<StaffColumn>,
    ) -> Result<TablePage<Staff>, ShelterError> {
        self.service.list_staff(query).await
    }

    async fn get_staff(&self, id: Uuid) -> Result<Staff, ShelterError> {
        self.service.get_staff(id).await
    }

    async fn update_staff(&self, id: Uuid, patch: StaffPatch) -> Result<Staff, ShelterError> {
        self.service.update_staff(id, patch).await
    }

    async fn delete_staff(&self, id: Uuid) -> Result<(), ShelterError> {
        self.service.delete_staff(id).await
    }
}
