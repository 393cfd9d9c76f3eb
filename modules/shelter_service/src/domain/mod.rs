//! Domain layer - business logic and services

pub mod events;
pub mod repository;
pub mod service;
pub mod table_view;
pub mod validation;

pub use events::{EventPublisher, NoOpEventPublisher, RecordEvent, TracingEventPublisher};
pub use repository::{DuplicateKey, LogoStorage, RslRepository, StaffRepository, UploadError};
pub use service::Service;
