use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::targets::{compute_targets, Targets};

/// Biological sex category. Only used to pick the BMR offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Sex {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
}

/// Activity levels, ordered from least to most active.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentary")]
    Sedentary,
    #[serde(rename = "Lightly Active")]
    #[value(name = "light")]
    LightlyActive,
    #[serde(rename = "Moderately Active")]
    #[value(name = "moderate")]
    ModeratelyActive,
    #[serde(rename = "Very Active")]
    #[value(name = "very")]
    VeryActive,
    #[serde(rename = "Extremely Active")]
    #[value(name = "extreme")]
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    /// Multiplier applied to BMR to get total daily energy expenditure.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Goal {
    #[serde(rename = "Fat Loss")]
    FatLoss,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "Weight Gain")]
    WeightGain,
    #[serde(rename = "Maintenance")]
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::FatLoss,
        Goal::MuscleGain,
        Goal::WeightGain,
        Goal::Maintenance,
    ];

    /// Kilocalories added to (or removed from) TDEE for this goal.
    pub fn calorie_adjustment(self) -> f64 {
        match self {
            Goal::FatLoss => -500.0,
            Goal::MuscleGain | Goal::WeightGain => 300.0,
            Goal::Maintenance => 0.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::FatLoss => "Fat Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::WeightGain => "Weight Gain",
            Goal::Maintenance => "Maintenance",
        };
        f.write_str(label)
    }
}

/// Body metrics, activity and goal. The only input to the target calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// A stored user: name, body profile and the targets derived from it.
///
/// `targets` is a cache. Every constructor recomputes it from `body`, and
/// deserialization ignores whatever targets were on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredProfile")]
pub struct UserProfile {
    pub name: String,
    #[serde(flatten)]
    body: BodyProfile,
    #[serde(flatten)]
    targets: Targets,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, body: BodyProfile) -> Self {
        Self {
            name: name.into(),
            targets: compute_targets(&body),
            body,
        }
    }

    pub fn body(&self) -> &BodyProfile {
        &self.body
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Replaces the body profile and recomputes the targets.
    pub fn set_body(&mut self, body: BodyProfile) {
        self.targets = compute_targets(&body);
        self.body = body;
    }
}

// On-disk form. Stored targets are accepted but discarded.
#[derive(Deserialize)]
struct StoredProfile {
    name: String,
    #[serde(flatten)]
    body: BodyProfile,
}

impl From<StoredProfile> for UserProfile {
    fn from(stored: StoredProfile) -> Self {
        UserProfile::new(stored.name, stored.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> BodyProfile {
        BodyProfile {
            age_years: 25,
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: Sex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::Maintenance,
        }
    }

    #[test]
    fn test_enum_labels_match_stored_form() {
        assert_eq!(serde_json::to_string(&Goal::FatLoss).unwrap(), "\"Fat Loss\"");
        assert_eq!(
            serde_json::to_string(&ActivityLevel::LightlyActive).unwrap(),
            "\"Lightly Active\""
        );
        assert_eq!(serde_json::to_string(&Sex::Other).unwrap(), "\"other\"");
        assert_eq!(Goal::WeightGain.to_string(), "Weight Gain");
    }

    #[test]
    fn test_activity_levels_are_ordered_by_multiplier() {
        for pair in ActivityLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_user_profile_serializes_flat_with_targets() {
        let profile = UserProfile::new("Ada", sample_body());
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["weight_kg"], 70.0);
        assert_eq!(value["goal"], "Maintenance");
        assert_eq!(value["daily_calories"], 2594);
        assert_eq!(value["macros"]["protein_g"], 140);
    }

    #[test]
    fn test_stale_stored_targets_are_recomputed() {
        let json = r#"{
            "name": "Ada",
            "age_years": 25,
            "weight_kg": 70.0,
            "height_cm": 175.0,
            "sex": "male",
            "activity_level": "Moderately Active",
            "goal": "Maintenance",
            "daily_calories": 9999,
            "macros": { "protein_g": 1, "carbs_g": 1, "fat_g": 1 }
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.targets().daily_calories, 2594);
        assert_eq!(profile.targets().macros.protein_g, 140);
    }

    #[test]
    fn test_set_body_recomputes_targets() {
        let mut profile = UserProfile::new("Ada", sample_body());
        let before = *profile.targets();
        let mut body = sample_body();
        body.goal = Goal::FatLoss;
        profile.set_body(body);
        assert_eq!(profile.targets().daily_calories, before.daily_calories - 500);
    }
}
