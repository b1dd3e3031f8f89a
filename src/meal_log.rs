use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalScore {
    Good,
    Moderate,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Photo,
    Manual,
}

/// Nutrition estimate for one meal, as returned by the food analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysis {
    pub item_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    pub goal_score: GoalScore,
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// 0-100
    pub honesty_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    pub id: String,
    /// Unix epoch milliseconds.
    pub timestamp_ms: i64,
    pub log_type: LogType,
    pub data: FoodAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MealLog {
    pub fn new(log_type: LogType, data: FoodAnalysis, timestamp_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp_ms,
            log_type,
            data,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
