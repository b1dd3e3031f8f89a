use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::{ProfileStore, StoreError};
use crate::meal_log::MealLog;
use crate::profile::UserProfile;

const PROFILE_FILE: &str = "profile.json";
const LOGS_FILE: &str = "logs.json";

/// Keeps the profile and meal log as two JSON documents in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>, StoreError> {
        let path = self.data_dir.join(file_name);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored data yet");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    // Written to a sibling temp file first, then renamed over the target.
    async fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).await?;
        let contents = serde_json::to_string_pretty(value)?;
        let path = self.data_dir.join(file_name);
        let tmp_path = self.data_dir.join(format!("{}.tmp", file_name));
        fs::write(&tmp_path, contents).await?;
        fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write_json(PROFILE_FILE, profile).await?;
        info!(
            name = %profile.name,
            calories = profile.targets().daily_calories,
            "saved profile"
        );
        Ok(())
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.read_json(PROFILE_FILE).await
    }

    async fn load_logs(&self) -> Result<Vec<MealLog>, StoreError> {
        Ok(self.read_json(LOGS_FILE).await?.unwrap_or_default())
    }

    async fn add_log(&self, log: MealLog) -> Result<(), StoreError> {
        let mut logs = self.load_logs().await?;
        info!(id = %log.id, item = %log.data.item_name, "adding meal log");
        logs.insert(0, log);
        self.write_json(LOGS_FILE, &logs).await
    }

    async fn delete_log(&self, id: &str) -> Result<bool, StoreError> {
        let mut logs = self.load_logs().await?;
        let before = logs.len();
        logs.retain(|log| log.id != id);
        if logs.len() == before {
            return Ok(false);
        }
        self.write_json(LOGS_FILE, &logs).await?;
        info!(id, "deleted meal log");
        Ok(true)
    }
}
