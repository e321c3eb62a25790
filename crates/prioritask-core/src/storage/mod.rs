mod config;
pub mod task_store;

pub use config::{Config, StoreConfig};
pub use task_store::TaskStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `PRIORITASK_DATA_DIR` wins when set. Otherwise `~/.config/prioritask/`,
/// or `~/.config/prioritask-dev/` when `PRIORITASK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("PRIORITASK_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("PRIORITASK_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("prioritask-dev")
            } else {
                base_dir.join("prioritask")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
