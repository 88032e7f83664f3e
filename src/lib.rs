// Core layer - shared configuration and display-string helpers
pub mod core;

// Features layer - all feature modules
pub mod features;

// Re-export core items for convenience
pub use core::{capitalize_first, join_with_conjunction, AppConfig, SwipeThresholds};

// Re-export feature items
pub use features::{
    // Agenda
    short_day_label, WeekStrip,
    // Contacts
    format_phone, SupportContact,
    // Navigation
    swipe_target, Screen, SwipeDirection, SwipeTracker, TouchPoint, TouchRegion,
    // Reminders
    describe_recurrence, RecurrenceConfig, RecurrenceType, Reminder,
};
