use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;

/// Opaque persistence for the whole application snapshot: one blob,
/// read once at startup and rewritten wholly on every mutation.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns `None` when no blob has ever been written.
    async fn load(&self) -> anyhow::Result<Option<Bytes>>;
    async fn save(&self, blob: Bytes) -> anyhow::Result<()>;
}

/// File-backed blob store. Writes go to a sibling temp file first and are
/// renamed into place, so a crashed write never truncates the blob.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut p = self.path.clone().into_os_string();
        p.push(".tmp");
        PathBuf::from(p)
    }
}

#[async_trait]
impl BlobStore for FileStore {
    async fn load(&self) -> anyhow::Result<Option<Bytes>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", self.path.display())),
        }
    }

    async fn save(&self, blob: Bytes) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| *d != Path::new("")) {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create {}", dir.display()))?;
        }
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &blob)
            .await
            .with_context(|| format!("write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("rename into {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory blob store for tests; can be told to fail saves to exercise
/// the store's abort-before-swap path.
pub struct MemoryStore {
    blob: std::sync::Mutex<Option<Bytes>>,
    fail_saves: std::sync::atomic::AtomicBool,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            blob: std::sync::Mutex::new(None),
            fail_saves: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves
            .store(fail, std::sync::atomic::Ordering::SeqCst);
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn load(&self) -> anyhow::Result<Option<Bytes>> {
        Ok(self.blob.lock().unwrap().clone())
    }

    async fn save(&self, blob: Bytes) -> anyhow::Result<()> {
        if self.fail_saves.load(std::sync::atomic::Ordering::SeqCst) {
            anyhow::bail!("save rejected");
        }
        *self.blob.lock().unwrap() = Some(blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("barprep-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn file_store_load_is_none_before_first_save() {
        let store = FileStore::new(scratch_path("missing"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_store_round_trips_bytes() {
        let path = scratch_path("roundtrip");
        let store = FileStore::new(&path);
        store
            .save(Bytes::from_static(b"{\"users\":[]}"))
            .await
            .unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(&loaded[..], b"{\"users\":[]}");
        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn memory_store_failure_injection() {
        let store = MemoryStore::empty();
        store.save(Bytes::from_static(b"v1")).await.unwrap();
        store.set_fail_saves(true);
        assert!(store.save(Bytes::from_static(b"v2")).await.is_err());
        assert_eq!(&store.load().await.unwrap().unwrap()[..], b"v1");
    }
}
