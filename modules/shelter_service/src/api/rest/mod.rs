//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod multipart;
pub mod openapi;
pub mod routes;
