//! Common test utilities: in-memory repositories and a service wired to a
//! temporary upload directory

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use shelter_service::contract::*;
use shelter_service::domain::repository::{RslRepository, StaffRepository};
use shelter_service::domain::{NoOpEventPublisher, Service};
use shelter_service::infra::uploads::LogoStore;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

// ===== Mock repositories =====

#[derive(Clone, Default)]
pub struct MockRslRepo {
    data: Arc<RwLock<Vec<Rsl>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MockRslRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent create/update fail
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("simulated write failure");
        }
        Ok(())
    }
}

#[async_trait]
impl RslRepository for MockRslRepo {
    async fn create(&self, rsl: &Rsl) -> Result<Rsl> {
        self.check_writable()?;
        self.data.write().push(rsl.clone());
        Ok(rsl.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rsl>> {
        Ok(self.data.read().iter().find(|r| r.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Rsl>> {
        let mut rsls = self.data.read().clone();
        rsls.reverse();
        rsls.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rsls)
    }

    async fn update(&self, rsl: &Rsl) -> Result<Rsl> {
        self.check_writable()?;
        let mut data = self.data.write();
        match data.iter_mut().find(|r| r.id == rsl.id) {
            Some(existing) => {
                *existing = rsl.clone();
                Ok(rsl.clone())
            }
            None => bail!("RSL {} vanished", rsl.id),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|r| r.id != id);
        Ok(data.len() != before)
    }
}

#[derive(Clone, Default)]
pub struct MockStaffRepo {
    data: Arc<RwLock<Vec<Staff>>>,
}

impl MockStaffRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StaffRepository for MockStaffRepo {
    async fn create(&self, staff: &Staff) -> Result<Staff> {
        self.data.write().push(staff.clone());
        Ok(staff.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Staff>> {
        Ok(self.data.read().iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Staff>> {
        Ok(self
            .data
            .read()
            .iter()
            .find(|s| s.employee_id == employee_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Staff>> {
        Ok(self.data.read().iter().find(|s| s.email == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Staff>> {
        Ok(self.data.read().clone())
    }

    async fn update(&self, staff: &Staff) -> Result<Staff> {
        let mut data = self.data.write();
        match data.iter_mut().find(|s| s.id == staff.id) {
            Some(existing) => {
                *existing = staff.clone();
                Ok(staff.clone())
            }
            None => bail!("staff member {} vanished", staff.id),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|s| s.id != id);
        Ok(data.len() != before)
    }
}

// ===== Service fixture =====

pub const MAX_LOGO_BYTES: usize = 64 * 1024;

pub struct TestContext {
    pub service: Arc<Service>,
    pub rsl_repo: MockRslRepo,
    pub staff_repo: MockStaffRepo,
    upload_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let rsl_repo = MockRslRepo::new();
        let staff_repo = MockStaffRepo::new();
        let logos = LogoStore::open(upload_dir.path(), MAX_LOGO_BYTES)
            .await
            .unwrap();

        let service = Service::new(
            Arc::new(rsl_repo.clone()),
            Arc::new(staff_repo.clone()),
            Arc::new(logos),
            Arc::new(NoOpEventPublisher),
        );

        Self {
            service: Arc::new(service),
            rsl_repo,
            staff_repo,
            upload_dir,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        self.upload_dir.path()
    }

    /// Files currently in the upload directory, sorted
    pub fn stored_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.upload_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        files.sort();
        files
    }

    /// On-disk location of a `/uploads/<name>` public path
    pub fn file_for(&self, public_path: &str) -> PathBuf {
        let name = public_path.strip_prefix("/uploads/").unwrap();
        self.upload_dir.path().join(name)
    }
}

// ===== Builders =====

pub fn png(file_name: &str) -> LogoUpload {
    LogoUpload {
        file_name: file_name.to_string(),
        content: bytes::Bytes::from_static(b"\x89PNG\r\n\x1a\nfake"),
    }
}

pub fn new_rsl(name: &str) -> NewRsl {
    NewRsl {
        name: name.to_string(),
        email: Some(format!("info@{}.org", name.to_lowercase().replace(' ', "-"))),
        ..Default::default()
    }
}

pub fn new_staff(employee_id: &str, first: &str, last: &str, department: &str) -> NewStaff {
    NewStaff {
        employee_id: employee_id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@shelter.org", first.to_lowercase(), last.to_lowercase()),
        phone_number: None,
        department: department.to_string(),
        position: "Caseworker".to_string(),
        joining_date: NaiveDate::from_ymd_opt(2023, 1, 9).unwrap(),
        status: StaffStatus::Active,
    }
}
