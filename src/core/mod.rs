//! # Core Module
//!
//! Configuration and display-string helpers shared by the feature modules.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add text module with conjunction joining and capitalization
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod text;

// Re-export commonly used items
pub use config::{AppConfig, SwipeThresholds};
pub use text::{capitalize_first, join_with_conjunction};
