//! On-disk logo storage
//!
//! Files land in the configured upload directory as `<uuid><ext>` and are
//! addressed publicly as `/uploads/<uuid><ext>`.

use crate::domain::repository::{LogoStorage, UploadError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// URL prefix under which stored files are served
pub const PUBLIC_PREFIX: &str = "/uploads/";

/// Extensions accepted for logos (lower-case, without the dot)
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

pub struct LogoStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl LogoStore {
    /// Open the store, creating the directory tree if missing
    pub async fn open(dir: impl Into<PathBuf>, max_bytes: usize) -> std::io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        tracing::debug!(dir = %dir.display(), "logo store ready");
        Ok(Self { dir, max_bytes })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Map a public path back to a file inside the upload directory.
    ///
    /// Anything that is not a bare file name under `/uploads/` maps to `None`.
    pub fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let name = public_path.strip_prefix(PUBLIC_PREFIX)?;
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }
        Some(self.dir.join(name))
    }
}

/// Extension of the client file name, with its dot, as stored on disk.
/// Names without an extension yield an empty string.
pub fn stored_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

fn check_extension(file_name: &str) -> Result<String, UploadError> {
    let ext = stored_extension(file_name);
    let bare = ext.trim_start_matches('.').to_ascii_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&bare.as_str()) {
        return Err(UploadError::UnsupportedType {
            extension: if bare.is_empty() { "(none)".to_string() } else { bare },
            allowed: ALLOWED_EXTENSIONS.join(", "),
        });
    }
    Ok(ext)
}

#[async_trait]
impl LogoStorage for LogoStore {
    async fn store(&self, file_name: &str, content: &[u8]) -> Result<String, UploadError> {
        if content.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: content.len(),
                limit: self.max_bytes,
            });
        }
        let ext = check_extension(file_name)?;

        let stored_name = format!("{}{}", Uuid::new_v4(), ext);
        tokio::fs::write(self.dir.join(&stored_name), content).await?;

        tracing::debug!(file = %stored_name, size = content.len(), "stored logo");
        Ok(format!("{PUBLIC_PREFIX}{stored_name}"))
    }

    async fn remove(&self, public_path: &str) -> Result<bool, UploadError> {
        let Some(path) = self.resolve(public_path) else {
            tracing::warn!(path = %public_path, "ignoring logo path outside upload directory");
            return Ok(false);
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
