use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use crate::project::application::ports::outgoing::{ImageStore, ImageStoreError};

const URL_PREFIX: &str = "uploads";

/// Writes uploaded images under the public upload directory and hands back
/// the relative URL stored on the record (`uploads/<uuid>.<ext>`).
#[derive(Clone)]
pub struct FsImageStore {
    upload_dir: PathBuf,
}

impl FsImageStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub async fn ensure_dir(&self) -> Result<(), ImageStoreError> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| ImageStoreError::Io(e.to_string()))
    }

    /// Map a stored relative URL back onto the upload directory, refusing
    /// anything that walks outside it.
    fn resolve(&self, relative_url: &str) -> Option<PathBuf> {
        let relative = Path::new(relative_url).strip_prefix(URL_PREFIX).ok()?;

        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return None;
        }

        Some(self.upload_dir.join(relative))
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, bytes: Vec<u8>, extension: &str) -> Result<String, ImageStoreError> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.upload_dir.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ImageStoreError::Io(e.to_string()))?;

        Ok(format!("{}/{}", URL_PREFIX, file_name))
    }

    async fn delete(&self, relative_url: &str) -> Result<(), ImageStoreError> {
        let Some(path) = self.resolve(relative_url) else {
            return Err(ImageStoreError::Io(format!(
                "refusing to delete outside the upload dir: {}",
                relative_url
            )));
        };

        tokio::fs::remove_file(path)
            .await
            .map_err(|e| ImageStoreError::Io(e.to_string()))
    }
}
