//! Contract error types for the shelter service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Shelter service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelterError {
    /// Record not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource name ("RSL", "Staff member")
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Duplicate unique value
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Invalid input
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Rejected logo upload (type or size)
    #[error("Upload rejected: {message}")]
    Upload { message: String },

    /// Storage or filesystem failure; the cause is logged, never returned
    #[error("Internal error")]
    Internal,
}

impl ShelterError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }
}
