//! Contract layer - public API for inter-module communication
//!
//! Transport-agnostic models and the native client trait.
//! No serde derives on models; HTTP shapes live in `api::rest::dto`.

pub mod client;
pub mod error;
pub mod model;

pub use client::ShelterApi;
pub use error::ShelterError;
pub use model::{
    LogoUpload, NewRsl, NewStaff, Rsl, RslPatch, SortConfig, SortDirection, Staff, StaffColumn,
    StaffPatch, StaffStatus, TablePage, TableQuery, ROWS_PER_PAGE_OPTIONS,
};
