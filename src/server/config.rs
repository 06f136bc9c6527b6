use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_file: PathBuf,
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("STATETRACK_PORT", "4001"),
            db_file: PathBuf::from(try_load::<String>("STATETRACK_DB", "data/statetrack.db")),
            assets_dir: PathBuf::from(try_load::<String>("STATETRACK_ASSETS", "public")),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
