//! Seven-day agenda window with whole-week shifting.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::features::navigation::SwipeDirection;

/// Short pt-BR labels for the strip header, Sunday first
const SHORT_DAY_LABELS: [&str; 7] = ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"];

/// Strip header label for a weekday
pub fn short_day_label(weekday: Weekday) -> &'static str {
    SHORT_DAY_LABELS[weekday.num_days_from_sunday() as usize]
}

/// The seven-day window shown by the agenda strip.
///
/// Windows always start on Sunday and shift by whole weeks, with no
/// boundary limit in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStrip {
    week_start: NaiveDate,
}

impl WeekStrip {
    /// The strip whose window contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        let back = date.weekday().num_days_from_sunday() as i64;
        WeekStrip {
            week_start: date - Duration::days(back),
        }
    }

    /// First day (Sunday) of the window
    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// The seven days of the window, Sunday through Saturday
    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|offset| self.week_start + Duration::days(offset as i64))
    }

    /// Whether `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date < self.week_start + Duration::days(7)
    }

    /// Shift the window one week forward
    pub fn advance(&mut self) {
        self.week_start = self.week_start + Duration::days(7);
    }

    /// Shift the window one week back
    pub fn retreat(&mut self) {
        self.week_start = self.week_start - Duration::days(7);
    }

    /// Apply a qualifying strip swipe: leftward flicks advance, rightward
    /// flicks retreat
    pub fn apply_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Left => self.advance(),
            SwipeDirection::Right => self.retreat(),
        }
    }
}
