//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs and infra/uploads.rs

use crate::contract::{Rsl, Staff};
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Repository for RSL records
#[async_trait]
pub trait RslRepository: Send + Sync {
    async fn create(&self, rsl: &Rsl) -> Result<Rsl>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rsl>>;

    /// All records, newest first
    async fn list_all(&self) -> Result<Vec<Rsl>>;

    async fn update(&self, rsl: &Rsl) -> Result<Rsl>;

    /// Returns false when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Repository for staff records
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Fails with [`DuplicateKey`] when the employee id or email is taken
    async fn create(&self, staff: &Staff) -> Result<Staff>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Staff>>;

    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Staff>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Staff>>;

    /// All records in insertion order
    async fn list_all(&self) -> Result<Vec<Staff>>;

    /// Fails with [`DuplicateKey`] when the employee id or email is taken
    async fn update(&self, staff: &Staff) -> Result<Staff>;

    /// Returns false when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// A write was rejected by a unique constraint.
///
/// Repositories return it inside `anyhow::Error`; the service downcasts it
/// into a conflict.
#[derive(Debug, Error)]
#[error("unique constraint violated: {0}")]
pub struct DuplicateKey(pub String);

/// Errors raised while storing an uploaded logo
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported logo type '{extension}', expected one of: {allowed}")]
    UnsupportedType { extension: String, allowed: String },

    #[error("logo is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Storage for logo files
#[async_trait]
pub trait LogoStorage: Send + Sync {
    /// Store the file under a generated name and return its public path
    async fn store(&self, file_name: &str, content: &[u8]) -> Result<String, UploadError>;

    /// Remove a stored file by public path; returns whether a file was removed
    async fn remove(&self, public_path: &str) -> Result<bool, UploadError>;
}
