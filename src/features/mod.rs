//! # Features Module
//!
//! Feature modules of the interaction core: swipe navigation, the agenda
//! week strip, reminder recurrence descriptions, and support-contact
//! helpers.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add contacts feature with phone mask and validation
//! - 1.1.0: Add agenda week strip
//! - 1.0.0: Initial layering with navigation and reminders

pub mod agenda;
pub mod contacts;
pub mod navigation;
pub mod reminders;

// Re-export feature items
pub use agenda::{short_day_label, WeekStrip};
pub use contacts::{format_phone, SupportContact};
pub use navigation::{swipe_target, Screen, SwipeDirection, SwipeTracker, TouchPoint, TouchRegion};
pub use reminders::{describe_recurrence, RecurrenceConfig, RecurrenceType, Reminder};
