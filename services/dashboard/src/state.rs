use std::sync::Arc;

use dataset::DatasetStore;

use crate::config::AppConfig;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: DatasetStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { store: DatasetStore::new(), config }
    }

    pub fn with_store(config: AppConfig, store: DatasetStore) -> Self {
        Self { store, config }
    }
}
