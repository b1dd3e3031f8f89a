use chrono::{DateTime, Local, LocalResult, TimeZone};
use serde::Serialize;

use crate::meal_log::MealLog;
use crate::profile::UserProfile;

/// Absolute totals eaten over a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConsumedTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub consumed_g: f64,
    pub target_g: i64,
    /// Target minus consumed. Negative once the target is exceeded.
    pub remaining_g: f64,
    /// Capped at 100.
    pub progress_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub meal_count: usize,
    pub consumed: ConsumedTotals,
    pub calorie_target: i64,
    pub remaining_calories: f64,
    pub calorie_percent: u8,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

fn capped_percent(consumed: f64, target: i64) -> u8 {
    if target <= 0 {
        return 0;
    }
    let percent = (consumed / target as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

fn macro_progress(consumed_g: f64, target_g: i64) -> MacroProgress {
    MacroProgress {
        consumed_g,
        target_g,
        remaining_g: target_g as f64 - consumed_g,
        progress_percent: capped_percent(consumed_g, target_g),
    }
}

/// Sums the meals logged since `day_start_ms` and compares them to the profile's targets.
///
/// # Arguments
/// * `profile`: The user whose targets the totals are measured against.
/// * `logs`: All meal logs, in any order. Logs before `day_start_ms` are skipped.
/// * `day_start_ms`: Start of the day in Unix epoch milliseconds.
pub fn summarize_day(profile: &UserProfile, logs: &[MealLog], day_start_ms: i64) -> DailySummary {
    let todays_logs = logs.iter().filter(|log| log.timestamp_ms >= day_start_ms);

    let mut consumed = ConsumedTotals::default();
    let mut meal_count = 0;
    for log in todays_logs {
        consumed.calories += log.data.calories;
        consumed.protein_g += log.data.protein;
        consumed.carbs_g += log.data.carbs;
        consumed.fat_g += log.data.fat;
        meal_count += 1;
    }

    let targets = profile.targets();
    DailySummary {
        meal_count,
        consumed,
        calorie_target: targets.daily_calories,
        remaining_calories: targets.daily_calories as f64 - consumed.calories,
        calorie_percent: capped_percent(consumed.calories, targets.daily_calories),
        protein: macro_progress(consumed.protein_g, targets.macros.protein_g),
        carbs: macro_progress(consumed.carbs_g, targets.macros.carbs_g),
        fat: macro_progress(consumed.fat_g, targets.macros.fat_g),
    }
}

/// Local midnight of the day containing `now`, in Unix epoch milliseconds.
pub fn local_day_start_ms(now: DateTime<Local>) -> i64 {
    let midnight = now.date_naive().and_hms_opt(0, 0, 0).unwrap_or_default();
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(start) => start.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        // Midnight skipped by a DST change; fall back to UTC interpretation.
        LocalResult::None => midnight.and_utc().timestamp_millis(),
    }
}
