use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV_VAR: &str = "NUTRI_DATA_DIR";
pub const LOG_LEVEL_ENV_VAR: &str = "NUTRI_LOG_LEVEL";

const DEFAULT_DATA_DIR: &str = "nutri_data";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Reads the config from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let log_level = lookup(LOG_LEVEL_ENV_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
            log_level,
        }
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}
