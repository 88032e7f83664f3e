//! Renders recurrence descriptions for a JSON file of reminder rows.
//!
//! Usage: `preview [reminders.json]`. Configuration is read from the file
//! named by `ANNIA_CONFIG` (default `annia.yaml`) when present.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::info;
use std::env;
use std::fs;
use std::path::Path;

use annia::{capitalize_first, describe_recurrence, AppConfig, Reminder};

fn main() -> Result<()> {
    dotenv().ok();

    let config_path = env::var("ANNIA_CONFIG").unwrap_or_else(|_| "annia.yaml".to_string());
    let config = if Path::new(&config_path).exists() {
        AppConfig::load(&config_path)?
    } else {
        AppConfig::default()
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "reminders.json".to_string());
    let contents =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let reminders: Vec<Reminder> =
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path))?;

    info!("Loaded {} reminders from {}", reminders.len(), path);

    for reminder in &reminders {
        println!(
            "{}: {}",
            reminder.title,
            capitalize_first(&describe_recurrence(reminder))
        );
    }

    Ok(())
}
