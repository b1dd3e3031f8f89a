pub mod json_file;

pub use json_file::JsonFileStore;

use async_trait::async_trait;
use std::error::Error;
use std::fmt;
use std::io;

use crate::meal_log::MealLog;
use crate::profile::UserProfile;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Storage I/O error: {}", err),
            StoreError::Serialization(err) => write!(f, "Stored data is not valid JSON: {}", err),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serialization(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err)
    }
}

/// Durable storage for the user profile and meal log.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;

    async fn load_profile(&self) -> Result<Option<UserProfile>, StoreError>;

    /// Newest first.
    async fn load_logs(&self) -> Result<Vec<MealLog>, StoreError>;

    /// Prepends `log` so the log stays newest first.
    async fn add_log(&self, log: MealLog) -> Result<(), StoreError>;

    /// Returns `false` when no log has this id.
    async fn delete_log(&self, id: &str) -> Result<bool, StoreError>;
}
