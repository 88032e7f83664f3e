//! # App Configuration Schema
//!
//! YAML-based runtime configuration with validation. Ships with defaults
//! matching the tuned swipe thresholds, so a missing file is not an error
//! for callers that use [`AppConfig::default`].
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Classification thresholds for one swipe surface.
///
/// Values are in milliseconds and logical pixels. The page and week-strip
/// surfaces keep separate profiles; see the associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SwipeThresholds {
    /// Touches held longer than this never navigate
    pub max_duration_ms: u64,
    /// Minimum horizontal displacement for a swipe to count
    pub min_distance_px: f64,
    /// Vertical displacement above `|dx| * ratio` rejects the touch as a scroll
    pub vertical_ratio: f64,
}

impl SwipeThresholds {
    /// Page-level navigation profile.
    ///
    /// 60 px is large enough to ignore finger jitter on touch screens while
    /// keeping a one-handed screen-to-screen swipe comfortable.
    pub const PAGE: SwipeThresholds = SwipeThresholds {
        max_duration_ms: 500,
        min_distance_px: 60.0,
        vertical_ratio: 0.6,
    };

    /// Agenda week-strip profile. The strip accepts shorter, quicker flicks
    /// than full pages.
    pub const WEEK_STRIP: SwipeThresholds = SwipeThresholds {
        max_duration_ms: 400,
        min_distance_px: 50.0,
        vertical_ratio: 0.6,
    };
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_swipe() -> SwipeThresholds {
    SwipeThresholds::PAGE
}

fn default_week_swipe() -> SwipeThresholds {
    SwipeThresholds::WEEK_STRIP
}

/// Root configuration for the interaction core
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Log level filter handed to the logger at startup
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Thresholds for page-level swipe navigation
    #[serde(default = "default_page_swipe")]
    pub page_swipe: SwipeThresholds,

    /// Thresholds for the agenda week-strip swipe
    #[serde(default = "default_week_swipe")]
    pub week_swipe: SwipeThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: default_log_level(),
            page_swipe: SwipeThresholds::PAGE,
            week_swipe: SwipeThresholds::WEEK_STRIP,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// Validate threshold sanity for both swipe surfaces
    pub fn validate(&self) -> Result<()> {
        for (surface, thresholds) in [("page_swipe", &self.page_swipe), ("week_swipe", &self.week_swipe)] {
            if thresholds.max_duration_ms == 0 {
                return Err(anyhow::anyhow!(
                    "{}: max_duration_ms must be positive",
                    surface
                ));
            }
            if thresholds.min_distance_px <= 0.0 {
                return Err(anyhow::anyhow!(
                    "{}: min_distance_px must be positive",
                    surface
                ));
            }
            if thresholds.vertical_ratio <= 0.0 {
                return Err(anyhow::anyhow!(
                    "{}: vertical_ratio must be positive",
                    surface
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_tuned_thresholds() {
        let config = AppConfig::default();
        assert_eq!(config.page_swipe.max_duration_ms, 500);
        assert_eq!(config.page_swipe.min_distance_px, 60.0);
        assert_eq!(config.week_swipe.max_duration_ms, 400);
        assert_eq!(config.week_swipe.min_distance_px, 50.0);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "log_level: debug\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.page_swipe, SwipeThresholds::PAGE);
        assert_eq!(config.week_swipe, SwipeThresholds::WEEK_STRIP);
    }

    #[test]
    fn test_explicit_thresholds_override_defaults() {
        let yaml = r#"
page_swipe:
  max_duration_ms: 650
  min_distance_px: 80.0
  vertical_ratio: 0.5
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.page_swipe.max_duration_ms, 650);
        assert_eq!(config.page_swipe.min_distance_px, 80.0);
        assert_eq!(config.week_swipe, SwipeThresholds::WEEK_STRIP);
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let mut config = AppConfig::default();
        config.week_swipe.max_duration_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_distance() {
        let mut config = AppConfig::default();
        config.page_swipe.min_distance_px = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_ratio() {
        let mut config = AppConfig::default();
        config.page_swipe.vertical_ratio = -0.1;
        assert!(config.validate().is_err());
    }
}
