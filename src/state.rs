use crate::config::AppConfig;
use crate::storage::{BlobStore, FileStore};
use crate::store::DataStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<DataStore>,
}

impl AppState {
    /// Loads config, opens the file-backed blob store and brings the data
    /// store to ready (seeding on first-ever start).
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let blob = Arc::new(FileStore::new(&config.data_path)) as Arc<dyn BlobStore>;
        let store = Arc::new(DataStore::new(blob));
        store.load().await?;
        Ok(Self { config, store })
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<DataStore>) -> Self {
        Self { config, store }
    }

    /// In-memory state seeded with the reference dataset, for tests.
    pub async fn fake() -> Self {
        use crate::storage::MemoryStore;

        let config = Arc::new(AppConfig {
            data_path: "unused".into(),
            host: "127.0.0.1".into(),
            port: 0,
        });
        let blob = Arc::new(MemoryStore::empty()) as Arc<dyn BlobStore>;
        let store = Arc::new(DataStore::new(blob));
        store.load().await.expect("memory seed load");
        Self { config, store }
    }
}
