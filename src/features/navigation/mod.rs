//! # Feature: Swipe Navigation
//!
//! Gesture-driven navigation across the app's top-level screens and the
//! agenda week strip. Touch samples are classified against duration,
//! distance, and axis-dominance thresholds; a qualifying swipe moves one
//! step through the fixed screen sequence.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.4.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Region chain with explicit horizontal-scroll ownership flags
//! - 1.0.0: Initial release with page swipe tracking

pub mod gesture;
pub mod screens;

pub use gesture::{SwipeDirection, SwipeTracker, TouchPoint, TouchRegion};
pub use screens::{swipe_target, Screen};
