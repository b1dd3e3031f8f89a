use anyhow::{Context, Result};
use chrono::{Local, Utc};
use serde::Serialize;

use nutri_targets::cli::{parse_args, Command};
use nutri_targets::config::AppConfig;
use nutri_targets::daily_summary::{local_day_start_ms, summarize_day, DailySummary};
use nutri_targets::flows::{edit_profile, onboard, ProfileUpdate};
use nutri_targets::logging::init_logging;
use nutri_targets::meal_log::{LogType, MealLog};
use nutri_targets::profile::{BodyProfile, UserProfile};
use nutri_targets::store::{JsonFileStore, ProfileStore};
use nutri_targets::targets::{energy_breakdown, Targets};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn print_targets(targets: &Targets) {
    println!("Daily calories: {} kcal", targets.daily_calories);
    println!("Protein:        {} g", targets.macros.protein_g);
    println!("Carbs:          {} g", targets.macros.carbs_g);
    println!("Fat:            {} g", targets.macros.fat_g);
}

fn print_profile(profile: &UserProfile) {
    let body = profile.body();
    println!("{} ({})", profile.name, body.goal);
    println!(
        "{} years, {} kg, {} cm, {}, {}",
        body.age_years, body.weight_kg, body.height_cm, body.sex, body.activity_level
    );
    print_targets(profile.targets());
}

fn print_summary(summary: &DailySummary) {
    println!(
        "{} meals today: {:.0} / {} kcal ({}%), {:.0} kcal left",
        summary.meal_count,
        summary.consumed.calories,
        summary.calorie_target,
        summary.calorie_percent,
        summary.remaining_calories
    );
    for (label, progress) in [
        ("Protein", &summary.protein),
        ("Carbs", &summary.carbs),
        ("Fat", &summary.fat),
    ] {
        println!(
            "{:<8} {:.0} / {} g ({}%)",
            label, progress.consumed_g, progress.target_g, progress.progress_percent
        );
    }
}

async fn require_profile(store: &JsonFileStore) -> Result<UserProfile> {
    store
        .load_profile()
        .await
        .with_context(|| format!("Failed to read profile from '{}'", store.data_dir().display()))?
        .context("No profile saved yet; run `onboard` first")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = parse_args();
    let config = AppConfig::from_env().with_data_dir(cli_args.data_dir.clone());
    init_logging(&config.log_level);

    let store = JsonFileStore::new(&config.data_dir);

    match cli_args.command {
        Command::Calc(body) => {
            let body = BodyProfile::from(body);
            if cli_args.json {
                print_json(&energy_breakdown(&body).rounded())?;
            } else {
                let breakdown = energy_breakdown(&body);
                println!("BMR:  {:.2} kcal", breakdown.bmr);
                println!("TDEE: {:.2} kcal", breakdown.tdee);
                print_targets(&breakdown.rounded());
            }
        }
        Command::Onboard { name, body } => {
            let profile = onboard(&store, &name, body.into())
                .await
                .context("Onboarding failed")?;
            if cli_args.json {
                print_json(&profile)?;
            } else {
                print_profile(&profile);
            }
        }
        Command::Edit(args) => {
            let update = ProfileUpdate::from(args);
            if update.is_empty() {
                println!("Nothing to change; targets recomputed from the saved profile.");
            }
            let profile = edit_profile(&store, update)
                .await
                .context("Profile update failed")?;
            if cli_args.json {
                print_json(&profile)?;
            } else {
                print_profile(&profile);
            }
        }
        Command::Show => {
            let profile = require_profile(&store).await?;
            if cli_args.json {
                print_json(&profile)?;
            } else {
                print_profile(&profile);
            }
        }
        Command::LogMeal(args) => {
            let log_type = if args.image.is_some() { LogType::Photo } else { LogType::Manual };
            let mut log = MealLog::new(log_type, args.to_analysis(), Utc::now().timestamp_millis());
            if let Some(image) = &args.image {
                log = log.with_image_url(image.clone());
            }
            let id = log.id.clone();
            store.add_log(log).await.context("Failed to save meal log")?;
            println!("Logged meal {}", id);
        }
        Command::DeleteMeal { id } => {
            let deleted = store.delete_log(&id).await.context("Failed to update meal log")?;
            if deleted {
                println!("Deleted meal {}", id);
            } else {
                anyhow::bail!("No meal with id '{}'", id);
            }
        }
        Command::Summary => {
            let profile = require_profile(&store).await?;
            let logs = store.load_logs().await.context("Failed to read meal log")?;
            let summary = summarize_day(&profile, &logs, local_day_start_ms(Local::now()));
            if cli_args.json {
                print_json(&summary)?;
            } else {
                print_summary(&summary);
            }
        }
    }

    Ok(())
}
