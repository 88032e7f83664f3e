//! # Feature: Reminders
//!
//! Reminder rows and their human-readable schedule descriptions.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.2.0: Interval recurrence with day pluralization
//! - 1.1.0: Weekly recurrence with explicit weekday sets
//! - 1.0.0: Initial release with daily/monthly/yearly descriptions

pub mod recurrence;

pub use recurrence::{describe_recurrence, RecurrenceConfig, RecurrenceType, Reminder};
