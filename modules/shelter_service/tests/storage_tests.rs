//! SeaORM repositories against in-memory SQLite

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use shelter_service::contract::*;
use shelter_service::domain::repository::{DuplicateKey, RslRepository, StaffRepository};
use shelter_service::domain::{NoOpEventPublisher, Service};
use shelter_service::infra::uploads::LogoStore;
use shelter_service::infra::storage::migrations::Migrator;
use shelter_service::infra::storage::repositories::{SeaOrmRslRepository, SeaOrmStaffRepository};
use std::sync::Arc;
use uuid::Uuid;

async fn connect() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection would see its own empty in-memory database.
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

fn rsl(name: &str, created_offset_secs: i64) -> Rsl {
    let at = Utc::now() + Duration::seconds(created_offset_secs);
    Rsl {
        id: Uuid::new_v4(),
        name: name.to_string(),
        registration_number: Some("L0001".to_string()),
        email: None,
        phone_number: None,
        address: Some("1 High Street".to_string()),
        website: None,
        logo: Some(format!("/uploads/{}.png", Uuid::new_v4())),
        created_at: at,
        updated_at: at,
    }
}

fn staff(employee_id: &str, email: &str) -> Staff {
    let now = Utc::now();
    Staff {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Byron".to_string(),
        email: email.to_string(),
        phone_number: None,
        department: "Housing".to_string(),
        position: "Caseworker".to_string(),
        joining_date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
        status: StaffStatus::OnLeave,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_migrator_up_on_empty_database() {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    Migrator::up(&db, None).await.unwrap();

    let applied: Vec<String> = Migrator::get_applied_migrations(&db)
        .await
        .unwrap()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(
        applied,
        vec!["m20250301_000001_create_rsl", "m20250301_000002_create_staff"]
    );
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = connect().await;
    Migrator::up(&*db, None).await.unwrap();
    assert!(Migrator::get_pending_migrations(&*db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rsl_repository_crud() {
    let repo = SeaOrmRslRepository::new(connect().await);

    let older = repo.create(&rsl("Older", -60)).await.unwrap();
    let newer = repo.create(&rsl("Newer", 0)).await.unwrap();
    assert_eq!(older.name, "Older");
    assert!(older.logo.is_some());

    let listed: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(listed, vec!["Newer", "Older"]);

    let mut changed = newer.clone();
    changed.name = "Newer Trust".to_string();
    changed.logo = None;
    repo.update(&changed).await.unwrap();
    let fetched = repo.find_by_id(newer.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Newer Trust");
    assert_eq!(fetched.logo, None);
    assert_eq!(fetched.address.as_deref(), Some("1 High Street"));

    assert!(repo.delete(older.id).await.unwrap());
    assert!(!repo.delete(older.id).await.unwrap());
    assert!(repo.find_by_id(older.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_staff_repository_lookups() {
    let repo = SeaOrmStaffRepository::new(connect().await);

    let created = repo
        .create(&staff("EMP-001", "ada@shelter.org"))
        .await
        .unwrap();
    assert_eq!(created.status, StaffStatus::OnLeave);
    assert_eq!(
        created.joining_date,
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    );

    let by_employee = repo.find_by_employee_id("EMP-001").await.unwrap().unwrap();
    assert_eq!(by_employee.id, created.id);
    let by_email = repo.find_by_email("ada@shelter.org").await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);
    assert!(repo.find_by_email("nobody@shelter.org").await.unwrap().is_none());

    let mut changed = created.clone();
    changed.status = StaffStatus::Inactive;
    changed.phone_number = Some("0161 496 0000".to_string());
    repo.update(&changed).await.unwrap();
    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, StaffStatus::Inactive);
    assert_eq!(fetched.phone_number.as_deref(), Some("0161 496 0000"));
}

#[tokio::test]
async fn test_staff_unique_indexes() {
    let repo = SeaOrmStaffRepository::new(connect().await);
    repo.create(&staff("EMP-001", "ada@shelter.org"))
        .await
        .unwrap();

    let err = repo
        .create(&staff("EMP-001", "other@shelter.org"))
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<DuplicateKey>().is_some());
    assert!(repo
        .create(&staff("EMP-002", "ada@shelter.org"))
        .await
        .is_err());
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_staff_listed_in_insertion_order() {
    let repo = SeaOrmStaffRepository::new(connect().await);
    for n in 1..=3 {
        let mut s = staff(&format!("EMP-00{n}"), &format!("s{n}@shelter.org"));
        s.created_at = Utc::now() + Duration::seconds(n);
        repo.create(&s).await.unwrap();
    }

    let ids: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.employee_id)
        .collect();
    assert_eq!(ids, vec!["EMP-001", "EMP-002", "EMP-003"]);
}

/// Staff repository whose lookups never see existing rows, as happens when
/// two requests check uniqueness before either has inserted.
struct StaleLookups(SeaOrmStaffRepository);

#[async_trait::async_trait]
impl StaffRepository for StaleLookups {
    async fn create(&self, staff: &Staff) -> anyhow::Result<Staff> {
        self.0.create(staff).await
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Staff>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_employee_id(&self, _employee_id: &str) -> anyhow::Result<Option<Staff>> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> anyhow::Result<Option<Staff>> {
        Ok(None)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Staff>> {
        self.0.list_all().await
    }

    async fn update(&self, staff: &Staff) -> anyhow::Result<Staff> {
        self.0.update(staff).await
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        self.0.delete(id).await
    }
}

#[tokio::test]
async fn test_unique_index_rejection_is_a_conflict() {
    let db = connect().await;
    let uploads = tempfile::tempdir().unwrap();
    let service = Service::new(
        Arc::new(SeaOrmRslRepository::new(db.clone())),
        Arc::new(StaleLookups(SeaOrmStaffRepository::new(db))),
        Arc::new(LogoStore::open(uploads.path(), 1024).await.unwrap()),
        Arc::new(NoOpEventPublisher),
    );

    let new_staff = |employee_id: &str, email: &str| NewStaff {
        employee_id: employee_id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Byron".to_string(),
        email: email.to_string(),
        phone_number: None,
        department: "Housing".to_string(),
        position: "Caseworker".to_string(),
        joining_date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
        status: StaffStatus::Active,
    };

    let first = service
        .create_staff(new_staff("E1", "a@x.org"))
        .await
        .unwrap();

    let err = service
        .create_staff(new_staff("E1", "b@x.org"))
        .await
        .unwrap_err();
    assert!(matches!(err, ShelterError::Conflict { .. }), "got {err:?}");

    let other = service
        .create_staff(new_staff("E2", "b@x.org"))
        .await
        .unwrap();
    let err = service
        .update_staff(
            other.id,
            StaffPatch {
                email: Some("a@x.org".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ShelterError::Conflict { .. }), "got {err:?}");

    assert_eq!(service.get_staff(first.id).await.unwrap().email, "a@x.org");
}
