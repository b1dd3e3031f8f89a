use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::{BodyProfile, Sex};

const PROTEIN_G_PER_KG: f64 = 2.0;
const FAT_CALORIE_SHARE: f64 = 0.25;
const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

const MALE_BMR_OFFSET: f64 = 5.0;
const FEMALE_BMR_OFFSET: f64 = -161.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// Daily calorie budget and macro split, rounded to whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    pub daily_calories: i64,
    pub macros: MacroTargets,
}

/// Every intermediate value of the target calculation, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    /// TDEE after the goal adjustment. This is the calorie target.
    pub adjusted_tdee: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl EnergyBreakdown {
    /// Rounds each field on its own. Macro calories will not always add up
    /// to the rounded calorie target.
    pub fn rounded(&self) -> Targets {
        Targets {
            daily_calories: round_half_up(self.adjusted_tdee),
            macros: MacroTargets {
                protein_g: round_half_up(self.protein_g),
                carbs_g: round_half_up(self.carbs_g),
                fat_g: round_half_up(self.fat_g),
            },
        }
    }
}

// Halves go toward positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Basal metabolic rate, Mifflin-St Jeor.
///
/// Anything other than `Sex::Male` takes the female offset.
pub fn basal_metabolic_rate(profile: &BodyProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age_years);
    if profile.sex == Sex::Male {
        base + MALE_BMR_OFFSET
    } else {
        base + FEMALE_BMR_OFFSET
    }
}

/// Runs the full calculation and keeps the unrounded values.
///
/// # Arguments
/// * `profile`: Body metrics, activity level and goal.
///
/// # Returns
/// An `EnergyBreakdown` with BMR, TDEE, goal-adjusted TDEE and macro grams.
pub fn energy_breakdown(profile: &BodyProfile) -> EnergyBreakdown {
    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * profile.activity_level.multiplier();
    let adjusted_tdee = tdee + profile.goal.calorie_adjustment();

    let protein_g = PROTEIN_G_PER_KG * profile.weight_kg;
    let fat_g = adjusted_tdee * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let carbs_g =
        (adjusted_tdee - (protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT)) / KCAL_PER_G_CARB;

    EnergyBreakdown {
        bmr,
        tdee,
        adjusted_tdee,
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Maps a body profile to its daily calorie and macro targets.
///
/// Total and deterministic. Implausible inputs (zero weight, huge ages)
/// are not rejected and simply give implausible targets.
pub fn compute_targets(profile: &BodyProfile) -> Targets {
    let breakdown = energy_breakdown(profile);
    let targets = breakdown.rounded();
    debug!(
        bmr = breakdown.bmr,
        tdee = breakdown.tdee,
        calories = targets.daily_calories,
        "computed targets"
    );
    targets
}
