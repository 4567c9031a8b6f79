use std::sync::Arc;
use std::time::Instant;

use cellar_file::FileBeerStore;

use super::config::Config;

/// Shared application state: the store, the configuration and the
/// process start instant for the health endpoint's uptime figure.
pub struct AppState {
    pub store: FileBeerStore,
    pub config: Config,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let store = FileBeerStore::new(&config.data_dir);

        Arc::new(Self {
            store,
            config,
            started_at: Instant::now(),
        })
    }
}
