use nutri_targets::daily_summary::summarize_day;
use nutri_targets::flows::{edit_profile, onboard, FlowError, ProfileUpdate};
use nutri_targets::meal_log::{FoodAnalysis, GoalScore, LogType, MealLog};
use nutri_targets::profile::{ActivityLevel, BodyProfile, Goal, Sex};
use nutri_targets::store::{JsonFileStore, ProfileStore, StoreError};
use tempfile::TempDir;

fn setup_store() -> (TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    // Nested directory so the store has to create it on first write.
    let store = JsonFileStore::new(dir.path().join("data"));
    (dir, store)
}

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

fn meal(name: &str, calories: f64, timestamp_ms: i64) -> MealLog {
    MealLog::new(
        LogType::Manual,
        FoodAnalysis {
            item_name: name.to_string(),
            calories,
            protein: 20.0,
            carbs: 30.0,
            fat: 10.0,
            fiber: 2.0,
            goal_score: GoalScore::Good,
            suggestions: vec!["Add vegetables".to_string()],
            honesty_score: 80,
        },
        timestamp_ms,
    )
}

#[tokio::test]
async fn test_empty_store_has_no_data() {
    let (_dir, store) = setup_store();
    assert_eq!(store.load_profile().await.unwrap(), None);
    assert!(store.load_logs().await.unwrap().is_empty());
    assert!(!store.delete_log("missing").await.unwrap());
}

#[tokio::test]
async fn test_onboard_then_reload() {
    let (_dir, store) = setup_store();
    let saved = onboard(&store, "Ada", sample_body()).await.unwrap();

    let reopened = JsonFileStore::new(store.data_dir());
    let loaded = reopened.load_profile().await.unwrap().expect("profile should be saved");
    assert_eq!(loaded, saved);
    assert_eq!(loaded.targets().daily_calories, 2594);
    assert_eq!(loaded.targets().macros.carbs_g, 346);
    assert!(!store.data_dir().join("profile.json.tmp").exists());
}

#[tokio::test]
async fn test_edit_persists_recomputed_targets() {
    let (_dir, store) = setup_store();
    onboard(&store, "Ada", sample_body()).await.unwrap();

    let update = ProfileUpdate {
        activity_level: Some(ActivityLevel::Sedentary),
        goal: Some(Goal::WeightGain),
        ..Default::default()
    };
    edit_profile(&store, update).await.unwrap();

    let loaded = store.load_profile().await.unwrap().unwrap();
    assert_eq!(loaded.body().activity_level, ActivityLevel::Sedentary);
    // 1673.75 * 1.2 + 300 = 2308.5
    assert_eq!(loaded.targets().daily_calories, 2309);
    assert_eq!(loaded.targets().macros.protein_g, 140);
}

#[tokio::test]
async fn test_edit_before_onboarding_fails() {
    let (_dir, store) = setup_store();
    let result = edit_profile(&store, ProfileUpdate::default()).await;
    assert!(matches!(result, Err(FlowError::NoProfile)));
}

#[tokio::test]
async fn test_hand_edited_targets_are_ignored() {
    let (_dir, store) = setup_store();
    onboard(&store, "Ada", sample_body()).await.unwrap();

    let path = store.data_dir().join("profile.json");
    let contents = std::fs::read_to_string(&path).unwrap();
    let tampered = contents.replace("2594", "5000");
    assert_ne!(contents, tampered);
    std::fs::write(&path, tampered).unwrap();

    let loaded = store.load_profile().await.unwrap().unwrap();
    assert_eq!(loaded.targets().daily_calories, 2594);
}

#[tokio::test]
async fn test_corrupt_profile_is_a_serialization_error() {
    let (_dir, store) = setup_store();
    std::fs::create_dir_all(store.data_dir()).unwrap();
    std::fs::write(store.data_dir().join("profile.json"), "{ not json").unwrap();

    let result = store.load_profile().await;
    assert!(matches!(result, Err(StoreError::Serialization(_))));
}

#[tokio::test]
async fn test_logs_are_newest_first_and_deletable() {
    let (_dir, store) = setup_store();
    let breakfast = meal("Breakfast", 400.0, 1_000);
    let lunch = meal("Lunch", 700.0, 2_000);
    let breakfast_id = breakfast.id.clone();

    store.add_log(breakfast).await.unwrap();
    store.add_log(lunch).await.unwrap();

    let logs = store.load_logs().await.unwrap();
    let names: Vec<&str> = logs.iter().map(|l| l.data.item_name.as_str()).collect();
    assert_eq!(names, vec!["Lunch", "Breakfast"]);

    assert!(store.delete_log(&breakfast_id).await.unwrap());
    assert!(!store.delete_log(&breakfast_id).await.unwrap());
    let logs = store.load_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].data.item_name, "Lunch");
}

#[tokio::test]
async fn test_summary_from_stored_data() {
    let (_dir, store) = setup_store();
    let profile = onboard(&store, "Ada", sample_body()).await.unwrap();
    let day_start = 10_000;

    store.add_log(meal("Yesterday", 900.0, day_start - 1)).await.unwrap();
    store.add_log(meal("Breakfast", 400.0, day_start + 1)).await.unwrap();
    store.add_log(meal("Lunch", 900.0, day_start + 2)).await.unwrap();

    let logs = store.load_logs().await.unwrap();
    let summary = summarize_day(&profile, &logs, day_start);
    assert_eq!(summary.meal_count, 2);
    assert_eq!(summary.consumed.calories, 1300.0);
    assert_eq!(summary.protein.consumed_g, 40.0);
    // 1300 / 2594 = 50.1%
    assert_eq!(summary.calorie_percent, 50);
}
