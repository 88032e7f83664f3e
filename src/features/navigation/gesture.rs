//! Swipe gesture recognition over raw touch samples.
//!
//! A tracker holds at most one armed touch at a time: `touch_start` arms it
//! (last write wins), `touch_end` disarms unconditionally and classifies
//! the pair against the tracker's thresholds. Touches that begin inside a
//! region owning horizontal scroll are ignored wholesale so inner
//! carousels keep their own gestures.

use log::debug;

use crate::core::config::SwipeThresholds;

/// One touch sample in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    /// Milliseconds on the host's monotonic clock
    pub timestamp_ms: u64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64, timestamp_ms: u64) -> Self {
        TouchPoint { x, y, timestamp_ms }
    }
}

/// Horizontal swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved leftward (negative dx); advances through content
    Left,
    /// Finger moved rightward (positive dx); retreats through content
    Right,
}

/// One entry of the region chain under a touch, innermost first.
///
/// The host shell passes the chain explicitly; any region that owns
/// horizontal scrolling, or opted out of swipe navigation, claims the
/// gesture for itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchRegion {
    /// Region scrolls horizontally on its own (carousel, chip row)
    pub owns_horizontal_scroll: bool,
    /// Region explicitly opted out of swipe navigation
    pub swipe_opt_out: bool,
}

impl TouchRegion {
    fn claims_gesture(&self) -> bool {
        self.owns_horizontal_scroll || self.swipe_opt_out
    }
}

#[derive(Debug, Clone, Copy)]
struct ArmedTouch {
    start: TouchPoint,
    ignore: bool,
}

/// Swipe recognizer; one instance per navigable surface.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    thresholds: SwipeThresholds,
    armed: Option<ArmedTouch>,
}

impl SwipeTracker {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        SwipeTracker {
            thresholds,
            armed: None,
        }
    }

    /// Tracker tuned for page-level navigation
    pub fn page() -> Self {
        SwipeTracker::new(SwipeThresholds::PAGE)
    }

    /// Tracker tuned for the agenda week strip
    pub fn week_strip() -> Self {
        SwipeTracker::new(SwipeThresholds::WEEK_STRIP)
    }

    /// Whether a touch is currently armed
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Arm the tracker with a new touch, discarding any previous one.
    ///
    /// `regions` is the region chain under the touch, innermost first.
    pub fn touch_start(&mut self, point: TouchPoint, regions: &[TouchRegion]) {
        let ignore = regions.iter().any(TouchRegion::claims_gesture);
        if ignore {
            debug!(
                "touch at ({:.0}, {:.0}) claimed by a scroll-owning region",
                point.x, point.y
            );
        }
        self.armed = Some(ArmedTouch {
            start: point,
            ignore,
        });
    }

    /// Resolve the armed touch against an end sample.
    ///
    /// Disarms unconditionally; returns a direction only for qualifying
    /// swipes. Without a matching `touch_start` this is a no-op.
    pub fn touch_end(&mut self, point: TouchPoint) -> Option<SwipeDirection> {
        let armed = self.armed.take()?;
        if armed.ignore {
            return None;
        }

        let dx = point.x - armed.start.x;
        let dy = point.y - armed.start.y;
        let dt = point.timestamp_ms.saturating_sub(armed.start.timestamp_ms);

        if dt > self.thresholds.max_duration_ms {
            debug!(
                "swipe rejected: {}ms exceeds {}ms",
                dt, self.thresholds.max_duration_ms
            );
            return None;
        }
        if dx.abs() < self.thresholds.min_distance_px {
            debug!(
                "swipe rejected: |dx| {:.1}px under {:.1}px",
                dx.abs(),
                self.thresholds.min_distance_px
            );
            return None;
        }
        if dy.abs() > dx.abs() * self.thresholds.vertical_ratio {
            debug!(
                "swipe rejected: vertical drift {:.1}px dominates {:.1}px",
                dy.abs(),
                dx.abs()
            );
            return None;
        }

        if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_at(tracker: &mut SwipeTracker, x: f64, y: f64, t: u64) {
        tracker.touch_start(TouchPoint::new(x, y, t), &[]);
    }

    #[test]
    fn test_leftward_swipe_qualifies() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 300.0, 200.0, 1_000);
        let direction = tracker.touch_end(TouchPoint::new(180.0, 210.0, 1_250));
        assert_eq!(direction, Some(SwipeDirection::Left));
        assert!(!tracker.is_armed());
    }

    #[test]
    fn test_rightward_swipe_qualifies() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 100.0, 200.0, 1_000);
        let direction = tracker.touch_end(TouchPoint::new(260.0, 195.0, 1_300));
        assert_eq!(direction, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_slow_touch_never_navigates() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 300.0, 200.0, 1_000);
        // Huge dx, but 800ms hold
        assert_eq!(tracker.touch_end(TouchPoint::new(20.0, 200.0, 1_800)), None);
    }

    #[test]
    fn test_duration_boundary_still_qualifies() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 300.0, 200.0, 1_000);
        let direction = tracker.touch_end(TouchPoint::new(200.0, 200.0, 1_500));
        assert_eq!(direction, Some(SwipeDirection::Left));
    }

    #[test]
    fn test_short_displacement_rejected() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 300.0, 200.0, 1_000);
        assert_eq!(
            tracker.touch_end(TouchPoint::new(245.0, 200.0, 1_100)),
            None
        );
    }

    #[test]
    fn test_distance_boundary_still_qualifies() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 300.0, 200.0, 1_000);
        let direction = tracker.touch_end(TouchPoint::new(240.0, 200.0, 1_100));
        assert_eq!(direction, Some(SwipeDirection::Left));
    }

    #[test]
    fn test_vertical_drift_rejected() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 300.0, 100.0, 1_000);
        // dx = -100, dy = 70 > 100 * 0.6
        assert_eq!(
            tracker.touch_end(TouchPoint::new(200.0, 170.0, 1_200)),
            None
        );
    }

    #[test]
    fn test_week_strip_accepts_shorter_flick() {
        let mut page = SwipeTracker::page();
        let mut strip = SwipeTracker::week_strip();
        page.touch_start(TouchPoint::new(200.0, 50.0, 0), &[]);
        strip.touch_start(TouchPoint::new(200.0, 50.0, 0), &[]);
        // 55px flick sits between the two distance thresholds
        assert_eq!(page.touch_end(TouchPoint::new(145.0, 50.0, 200)), None);
        assert_eq!(
            strip.touch_end(TouchPoint::new(145.0, 50.0, 200)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_week_strip_duration_cutoff() {
        let mut strip = SwipeTracker::week_strip();
        strip.touch_start(TouchPoint::new(200.0, 50.0, 0), &[]);
        assert_eq!(strip.touch_end(TouchPoint::new(100.0, 50.0, 450)), None);
    }

    #[test]
    fn test_scroll_owning_region_swallows_gesture() {
        let mut tracker = SwipeTracker::page();
        let chain = [
            TouchRegion {
                owns_horizontal_scroll: true,
                swipe_opt_out: false,
            },
            TouchRegion::default(),
        ];
        tracker.touch_start(TouchPoint::new(300.0, 200.0, 1_000), &chain);
        assert_eq!(tracker.touch_end(TouchPoint::new(100.0, 200.0, 1_200)), None);
        assert!(!tracker.is_armed());
    }

    #[test]
    fn test_opted_out_region_swallows_gesture() {
        let mut tracker = SwipeTracker::page();
        let chain = [TouchRegion {
            owns_horizontal_scroll: false,
            swipe_opt_out: true,
        }];
        tracker.touch_start(TouchPoint::new(300.0, 200.0, 1_000), &chain);
        assert_eq!(tracker.touch_end(TouchPoint::new(100.0, 200.0, 1_200)), None);
    }

    #[test]
    fn test_plain_region_chain_keeps_gesture() {
        let mut tracker = SwipeTracker::page();
        let chain = [TouchRegion::default(), TouchRegion::default()];
        tracker.touch_start(TouchPoint::new(300.0, 200.0, 1_000), &chain);
        assert_eq!(
            tracker.touch_end(TouchPoint::new(100.0, 200.0, 1_200)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_new_touch_overwrites_armed_one() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 500.0, 200.0, 1_000);
        // Second touch-start wins; its coordinates decide the outcome
        start_at(&mut tracker, 300.0, 200.0, 2_000);
        assert_eq!(
            tracker.touch_end(TouchPoint::new(200.0, 200.0, 2_200)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_touch_end_without_start_is_noop() {
        let mut tracker = SwipeTracker::page();
        assert_eq!(tracker.touch_end(TouchPoint::new(100.0, 100.0, 500)), None);
    }

    #[test]
    fn test_tracker_disarms_after_rejection() {
        let mut tracker = SwipeTracker::page();
        start_at(&mut tracker, 300.0, 200.0, 1_000);
        assert_eq!(tracker.touch_end(TouchPoint::new(295.0, 200.0, 1_050)), None);
        assert!(!tracker.is_armed());
        // The slate is clean for the next interaction
        assert_eq!(tracker.touch_end(TouchPoint::new(0.0, 0.0, 1_100)), None);
    }
}
