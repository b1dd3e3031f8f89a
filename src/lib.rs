pub mod cli;
pub mod config;
pub mod daily_summary;
pub mod flows;
pub mod logging;
pub mod meal_log;
pub mod profile;
pub mod store;
pub mod targets;
