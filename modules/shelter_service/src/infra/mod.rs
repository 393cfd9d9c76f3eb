//! Infrastructure layer - persistence and file storage

pub mod storage;
pub mod uploads;
