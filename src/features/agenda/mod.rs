//! # Feature: Agenda Week Strip
//!
//! Seven-day agenda window with whole-week shifting, driven by strip
//! swipes or the header arrows.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.0.0: Initial release with Sunday-anchored windows

pub mod week_strip;

pub use week_strip::{short_day_label, WeekStrip};
