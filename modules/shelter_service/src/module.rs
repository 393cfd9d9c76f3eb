//! Module declaration and lifecycle implementation
//!
//! The host application drives the lifecycle: `migrate`, then `init`, then
//! `register_rest`. `client` hands out the in-process API afterwards.

use crate::config::Config;
use crate::contract::ShelterApi;
use crate::domain::{EventPublisher, NoOpEventPublisher, Service, TracingEventPublisher};
use crate::infra::storage::repositories::{SeaOrmRslRepository, SeaOrmStaffRepository};
use crate::infra::uploads::LogoStore;
use anyhow::{Context, Result};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shelter service module
pub struct ShelterServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for ShelterServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl ShelterServiceModule {
    /// Wire repositories, logo storage and the domain service
    pub async fn init(&self, cfg: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        let logos = LogoStore::open(&cfg.upload_dir, cfg.max_logo_bytes)
            .await
            .with_context(|| {
                format!("failed to create upload directory {}", cfg.upload_dir.display())
            })?;

        // Build repositories
        let rsl_repo = Arc::new(SeaOrmRslRepository::new(db.clone()));
        let staff_repo = Arc::new(SeaOrmStaffRepository::new(db));

        let event_publisher: Arc<dyn EventPublisher> = if cfg.publish_audit_events {
            Arc::new(TracingEventPublisher)
        } else {
            Arc::new(NoOpEventPublisher)
        };

        // Build domain service
        let service = Service::new(rsl_repo, staff_repo, Arc::new(logos), event_publisher)
            .with_default_rows_per_page(cfg.default_rows_per_page);
        *self.service.write() = Some(Arc::new(service));

        tracing::info!(
            upload_dir = %cfg.upload_dir.display(),
            max_logo_bytes = cfg.max_logo_bytes,
            audit = cfg.publish_audit_events,
            "Shelter service initialized"
        );
        *self.config.write() = cfg;
        Ok(())
    }

    /// Bring the schema up to date
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Shelter service migrations completed");
        Ok(())
    }

    /// Mount the REST routes and the uploads file route
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        let upload_dir = self.config.read().upload_dir.clone();

        tracing::info!("Registering shelter service REST routes");
        crate::api::rest::routes::register_routes(router, service, &upload_dir)
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn ShelterApi>> {
        Ok(Arc::new(crate::api::native::NativeClient::new(
            self.service()?,
        )))
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
