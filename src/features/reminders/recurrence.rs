//! Recurrence descriptions for reminder cards.
//!
//! `describe_recurrence` is total: unknown types and malformed configs fall
//! back to a generic sentence instead of failing, so the card always has a
//! schedule line.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::text::join_with_conjunction;

/// How often a reminder repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    Once,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Interval,
    /// Catch-all for wire values this build does not know
    #[serde(other)]
    Unknown,
}

/// Variant payload for weekly and interval reminders
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecurrenceConfig {
    /// Weekdays the reminder fires on, 0 = Sunday through 6 = Saturday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,

    /// Gap in days between firings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_value: Option<i64>,
}

/// One reminder row as stored by the hosted backend
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    /// Anchor instant, already in the family's wall-clock time
    pub datetime: NaiveDateTime,
    pub recurrence_type: RecurrenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_config: Option<RecurrenceConfig>,
}

/// Plural weekday tokens, 0 = Sunday through 6 = Saturday
const WEEKDAY_PLURALS: [&str; 7] = [
    "domingos",
    "segundas",
    "terças",
    "quartas",
    "quintas",
    "sextas",
    "sábados",
];

/// Anchor time as shown on cards: `"9h"`, `"14h30"`
fn format_anchor_time(datetime: &NaiveDateTime) -> String {
    let hour = datetime.hour();
    let minute = datetime.minute();
    if minute == 0 {
        format!("{}h", hour)
    } else {
        format!("{}h{:02}", hour, minute)
    }
}

/// Describe a reminder's schedule in pt-BR.
///
/// Deterministic for a given reminder; never fails.
pub fn describe_recurrence(reminder: &Reminder) -> String {
    let time = format_anchor_time(&reminder.datetime);
    match reminder.recurrence_type {
        RecurrenceType::Daily => format!("Todos os dias às {}", time),
        RecurrenceType::Weekly => describe_weekly(reminder.recurrence_config.as_ref(), &time),
        RecurrenceType::Monthly => format!("Todo dia {} às {}", reminder.datetime.day(), time),
        RecurrenceType::Yearly => format!("Todo ano às {}", time),
        RecurrenceType::Interval => {
            let interval = reminder
                .recurrence_config
                .as_ref()
                .and_then(|config| config.interval_value)
                .filter(|value| *value >= 1)
                .unwrap_or(1);
            let unit = if interval > 1 { "dias" } else { "dia" };
            format!("A cada {} {} às {}", interval, unit, time)
        }
        RecurrenceType::Once | RecurrenceType::Unknown => format!("Recorrente às {}", time),
    }
}

fn describe_weekly(config: Option<&RecurrenceConfig>, time: &str) -> String {
    // Out-of-range indices are dropped rather than rejected; an all-invalid
    // set degrades to the generic weekly sentence
    let days: Vec<&str> = config
        .and_then(|config| config.days_of_week.as_ref())
        .map(|days| {
            days.iter()
                .filter_map(|day| WEEKDAY_PLURALS.get(*day as usize).copied())
                .collect()
        })
        .unwrap_or_default();

    if days.is_empty() {
        return format!("Toda semana às {}", time);
    }

    let prefix = if days.len() > 1 { "Todas as" } else { "Toda" };
    format!(
        "{} {} às {}",
        prefix,
        join_with_conjunction(&days, ", ", " e "),
        time
    )
}
