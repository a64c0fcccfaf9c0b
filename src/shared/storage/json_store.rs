// src/shared/storage/json_store.rs
//
// Whole-file JSON persistence: every collection lives in one file under the
// data directory and every mutation rewrites that file completely.
// Mutations go through `update`/`update_doc`, which hold a per-collection
// lock across the load-mutate-save cycle and replace the file by writing a
// sibling temp file and renaming it over the original.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct JsonStore {
    root: PathBuf,
    locks: std::sync::Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            locks: std::sync::Mutex::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_root(&self) -> Result<(), JsonStoreError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Read a collection. A missing or unreadable file is "no data", not an
    /// error: the next successful write rebuilds it.
    pub async fn read<T>(&self, name: &str) -> Result<Vec<T>, JsonStoreError>
    where
        T: DeserializeOwned,
    {
        self.load(name).await
    }

    /// Run `mutate` over the collection under the collection's lock and
    /// persist the result. The closure's return value is handed back to the
    /// caller, so adapters can report not-found or return the touched record.
    pub async fn update<T, R, F>(&self, name: &str, mutate: F) -> Result<R, JsonStoreError>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let lock = self.lock_for(name);
        let _guard = lock.lock().await;

        let mut items: Vec<T> = self.load(name).await?;
        let result = mutate(&mut items);
        self.persist(name, &items).await?;

        Ok(result)
    }

    /// Single-document variant of `read` (e.g. the stats counters file).
    pub async fn read_doc<T>(&self, name: &str) -> Result<T, JsonStoreError>
    where
        T: DeserializeOwned + Default,
    {
        self.load(name).await
    }

    /// Single-document variant of `update`.
    pub async fn update_doc<T, R, F>(&self, name: &str, mutate: F) -> Result<R, JsonStoreError>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> R,
    {
        let lock = self.lock_for(name);
        let _guard = lock.lock().await;

        let mut doc: T = self.load(name).await?;
        let result = mutate(&mut doc);
        self.persist(name, &doc).await?;

        Ok(result)
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    fn lock_for(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("store lock map poisoned");
        Arc::clone(locks.entry(name.to_string()).or_default())
    }

    async fn load<T>(&self, name: &str) -> Result<T, JsonStoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.file_path(name);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(error) => {
                warn!(collection = name, %error, "data file unreadable, treating as empty");
                Ok(T::default())
            }
        }
    }

    async fn persist<T>(&self, name: &str, value: &T) -> Result<(), JsonStoreError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.file_path(name);
        let tmp_path = self.root.join(format!("{}.json.tmp", name));

        let json = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        Ok(())
    }
}
