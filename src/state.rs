use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::{MemStorage, Storage};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn init(config: AppConfig) -> Self {
        let storage = if config.seed_sample_data {
            MemStorage::seeded()
        } else {
            MemStorage::empty()
        };
        Self::from_parts(Arc::new(config), Arc::new(storage) as Arc<dyn Storage>)
    }

    pub fn from_parts(config: Arc<AppConfig>, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }
}
