use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::flows::ProfileUpdate;
use crate::meal_log::{FoodAnalysis, GoalScore};
use crate::profile::{ActivityLevel, BodyProfile, Goal, Sex};

#[derive(Parser, Debug)]
#[command(author, version, about = "Daily calorie and macro targets", long_about = None)]
pub struct Cli {
    /// Directory holding profile.json and logs.json (overrides NUTRI_DATA_DIR)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute targets for a profile without saving anything
    Calc(BodyArgs),
    /// Create and save a new profile
    Onboard {
        #[arg(short, long)]
        name: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Change weight, height, goal or activity level and recompute targets
    Edit(EditArgs),
    /// Show the saved profile and its targets
    Show,
    /// Record a meal
    LogMeal(MealArgs),
    /// Remove a meal by id
    DeleteMeal {
        id: String,
    },
    /// Today's totals against the targets
    Summary,
}

#[derive(Args, Debug, Clone)]
pub struct BodyArgs {
    #[arg(long)]
    pub age: u32,
    /// Kilograms
    #[arg(long)]
    pub weight: f64,
    /// Centimeters
    #[arg(long)]
    pub height: f64,
    #[arg(long, value_enum)]
    pub sex: Sex,
    #[arg(long, value_enum, default_value = "moderate")]
    pub activity: ActivityLevel,
    #[arg(long, value_enum, default_value = "maintenance")]
    pub goal: Goal,
}

impl From<BodyArgs> for BodyProfile {
    fn from(args: BodyArgs) -> Self {
        BodyProfile {
            age_years: args.age,
            weight_kg: args.weight,
            height_cm: args.height,
            sex: args.sex,
            activity_level: args.activity,
            goal: args.goal,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long)]
    pub height: Option<f64>,
    #[arg(long, value_enum)]
    pub goal: Option<Goal>,
    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,
}

impl From<EditArgs> for ProfileUpdate {
    fn from(args: EditArgs) -> Self {
        ProfileUpdate {
            weight_kg: args.weight,
            height_cm: args.height,
            goal: args.goal,
            activity_level: args.activity,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct MealArgs {
    /// What was eaten
    #[arg(long)]
    pub item: String,
    #[arg(long)]
    pub calories: f64,
    #[arg(long, default_value_t = 0.0)]
    pub protein: f64,
    #[arg(long, default_value_t = 0.0)]
    pub carbs: f64,
    #[arg(long, default_value_t = 0.0)]
    pub fat: f64,
    #[arg(long, default_value_t = 0.0)]
    pub fiber: f64,
    /// Path or URL of the meal photo, if any
    #[arg(long)]
    pub image: Option<String>,
}

impl MealArgs {
    /// Manually entered meals have no analysis behind them.
    pub fn to_analysis(&self) -> FoodAnalysis {
        FoodAnalysis {
            item_name: self.item.clone(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            goal_score: GoalScore::Moderate,
            suggestions: Vec::new(),
            honesty_score: 100,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
