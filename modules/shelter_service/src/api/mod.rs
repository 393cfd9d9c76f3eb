//! API layer - REST surface and in-process client

pub mod native;
pub mod rest;
