//! Configuration for the shelter service module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shelter service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory where uploaded logos are written
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Maximum logo size in bytes
    #[serde(default = "default_max_logo_bytes")]
    pub max_logo_bytes: usize,

    /// Page size used when a staff listing does not ask for one
    #[serde(default = "default_rows_per_page")]
    pub default_rows_per_page: u32,

    /// Emit record events to the audit log
    #[serde(default = "default_true")]
    pub publish_audit_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_logo_bytes: default_max_logo_bytes(),
            default_rows_per_page: default_rows_per_page(),
            publish_audit_events: true,
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("./uploads")
}

fn default_max_logo_bytes() -> usize {
    5 * 1024 * 1024 // 5MB
}

fn default_rows_per_page() -> u32 {
    5
}

fn default_true() -> bool {
    true
}
