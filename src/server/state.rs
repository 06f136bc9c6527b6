use std::sync::Arc;

use tokio::fs;
use tracing::info;

use super::config::Config;
use crate::core::db::TrackerDb;

pub struct AppState {
    pub db: TrackerDb,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        // The data directory may not exist on first run.
        if let Some(parent) = config.db_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let db = TrackerDb::open(&config.db_file).await?;
        info!("Database location: {}", config.db_file.display());

        Ok(Arc::new(Self { db, config }))
    }
}
