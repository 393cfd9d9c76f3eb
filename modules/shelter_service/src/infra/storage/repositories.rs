//! SeaORM repository implementations

use crate::contract::{Rsl, Staff};
use crate::domain::repository::{DuplicateKey, RslRepository, StaffRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity::{rsl, staff};

/// Surface unique-index rejections as [`DuplicateKey`]
fn unique_violation(err: DbErr) -> anyhow::Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => DuplicateKey(detail).into(),
        _ => err.into(),
    }
}

// ===== RSL Repository =====

pub struct SeaOrmRslRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRslRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RslRepository for SeaOrmRslRepository {
    async fn create(&self, model: &Rsl) -> Result<Rsl> {
        let active: rsl::ActiveModel = model.into();
        let result = rsl::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rsl>> {
        let result = rsl::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<Rsl>> {
        let results = rsl::Entity::find()
            .order_by_desc(rsl::Column::CreatedAt)
            .order_by_asc(rsl::Column::Name)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, model: &Rsl) -> Result<Rsl> {
        let active: rsl::ActiveModel = model.into();
        let result = rsl::Entity::update(active).exec(&*self.db).await?;

        Ok(result.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = rsl::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

// ===== Staff Repository =====

pub struct SeaOrmStaffRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStaffRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepository for SeaOrmStaffRepository {
    async fn create(&self, model: &Staff) -> Result<Staff> {
        let active: staff::ActiveModel = model.into();
        let result = staff::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(unique_violation)?;

        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Staff>> {
        let result = staff::Entity::find_by_id(id).one(&*self.db).await?;

        result.map(Staff::try_from).transpose()
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Staff>> {
        let result = staff::Entity::find()
            .filter(staff::Column::EmployeeId.eq(employee_id))
            .one(&*self.db)
            .await?;

        result.map(Staff::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Staff>> {
        let result = staff::Entity::find()
            .filter(staff::Column::Email.eq(email))
            .one(&*self.db)
            .await?;

        result.map(Staff::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Staff>> {
        let results = staff::Entity::find()
            .order_by_asc(staff::Column::CreatedAt)
            .order_by_asc(staff::Column::EmployeeId)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(Staff::try_from)
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, model: &Staff) -> Result<Staff> {
        let active: staff::ActiveModel = model.into();
        let result = staff::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(unique_violation)?;

        result.try_into()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = staff::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
