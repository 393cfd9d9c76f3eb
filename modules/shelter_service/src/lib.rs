//! Shelter Service Module
//!
//! Record management for ShelterConnect: Registered Social Landlords (RSLs)
//! with their logo images, and the staff directory behind the admin table.

// Public exports
pub mod contract;
pub use contract::{
    client::ShelterApi, error::ShelterError, LogoUpload, NewRsl, NewStaff, Rsl, RslPatch,
    SortConfig, SortDirection, Staff, StaffColumn, StaffPatch, StaffStatus, TablePage,
    TableQuery,
};

pub mod module;
pub use module::ShelterServiceModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
