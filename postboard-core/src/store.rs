//! Post storage
//!
//! The [`PostStore`] trait is what the server holds. [`FilePostStore`] is the
//! real backend (a flat file, re-read on every call); [`MemoryPostStore`]
//! keeps the same encoded text in memory for tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};

use crate::codec::{decode_records, encode_record};
use crate::error::{Result, StoreError};
use crate::post::Post;

/// Read-all / append storage for posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every readable post, oldest first. A store with no data yet is empty,
    /// not an error.
    async fn read_all(&self) -> Result<Vec<Post>>;

    /// Append one post. Callers validate fields first.
    async fn append(&self, post: &Post) -> Result<()>;
}

/// Flat-file store
#[derive(Debug)]
pub struct FilePostStore {
    path: PathBuf,
    /// Single writer within this process
    write_lock: Mutex<()>,
}

impl FilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostStore for FilePostStore {
    async fn read_all(&self) -> Result<Vec<Post>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        Ok(decode_records(&String::from_utf8_lossy(&bytes)))
    }

    async fn append(&self, post: &Post) -> Result<()> {
        let record = encode_record(post);
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        file.write_all(record.as_bytes())
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        file.flush()
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::trace!(path = %self.path.display(), bytes = record.len(), "record appended");
        Ok(())
    }
}

/// In-memory store holding the encoded file text
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    text: RwLock<String>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw file contents, malformed lines included
    pub fn from_raw(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
        }
    }

    /// Current encoded contents
    pub async fn raw(&self) -> String {
        self.text.read().await.clone()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn read_all(&self) -> Result<Vec<Post>> {
        Ok(decode_records(&self.text.read().await))
    }

    async fn append(&self, post: &Post) -> Result<()> {
        self.text.write().await.push_str(&encode_record(post));
        Ok(())
    }
}
