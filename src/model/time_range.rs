// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// `chrono` format for display readings such as `6:05 PM`.
pub const CLOCK_12H_DISPLAY: &str = "%-I:%M %p";

/// A resolved daily time slot: a start offset plus a positive duration.
///
/// `start_minutes` is in `[0, 1440)` and `duration_minutes` in `1..=1440`. The end may lie past
/// midnight (`end_minutes() > 1440`) for overnight classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeRange {
    start_minutes: u32,
    duration_minutes: u32,
}

impl TimeRange {
    pub fn new(start_minutes: u32, duration_minutes: u32) -> Option<Self> {
        if start_minutes >= MINUTES_PER_DAY
            || duration_minutes == 0
            || duration_minutes > MINUTES_PER_DAY
        {
            return None;
        }
        Some(Self { start_minutes, duration_minutes })
    }

    /// Builds a range from two clock readings, wrapping past midnight when `end <= start`.
    ///
    /// Equal readings therefore describe a full 24h slot.
    pub fn from_clock_bounds(start_minutes: u32, end_minutes: u32) -> Option<Self> {
        if start_minutes >= MINUTES_PER_DAY || end_minutes >= MINUTES_PER_DAY {
            return None;
        }
        Some(Self::wrapping(start_minutes, end_minutes))
    }

    /// Same as [`TimeRange::from_clock_bounds`] for readings that are already valid times of day.
    pub fn between(start: NaiveTime, end: NaiveTime) -> Self {
        Self::wrapping(minute_of_day(start), minute_of_day(end))
    }

    /// Both bounds must be below `MINUTES_PER_DAY`.
    fn wrapping(start_minutes: u32, end_minutes: u32) -> Self {
        let duration_minutes = if end_minutes <= start_minutes {
            end_minutes + MINUTES_PER_DAY - start_minutes
        } else {
            end_minutes - start_minutes
        };
        Self { start_minutes, duration_minutes }
    }

    pub fn start_minutes(self) -> u32 {
        self.start_minutes
    }

    pub fn duration_minutes(self) -> u32 {
        self.duration_minutes
    }

    /// Exclusive end offset; exceeds 1440 for ranges crossing midnight.
    pub fn end_minutes(self) -> u32 {
        self.start_minutes + self.duration_minutes
    }

    pub fn crosses_midnight(self) -> bool {
        self.end_minutes() > MINUTES_PER_DAY
    }

    /// Half-open overlap test on `[start, end)`.
    pub fn overlaps(self, other: TimeRange) -> bool {
        self.start_minutes < other.end_minutes() && other.start_minutes < self.end_minutes()
    }
}

/// Whole minutes since midnight; leap-second fractions are dropped.
fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

/// The time of day `minutes` past midnight, wrapping at 24h.
fn time_of_day(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_num_seconds_from_midnight_opt((minutes % MINUTES_PER_DAY) * 60, 0)
}

impl fmt::Display for TimeRange {
    /// Canonical display form, `h:mm AM - h:mm PM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = time_of_day(self.start_minutes).ok_or(fmt::Error)?;
        let end = time_of_day(self.end_minutes()).ok_or(fmt::Error)?;
        write!(f, "{} - {}", start.format(CLOCK_12H_DISPLAY), end.format(CLOCK_12H_DISPLAY))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::{TimeRange, MINUTES_PER_DAY};

    #[test]
    fn new_rejects_out_of_range_values() {
        assert_eq!(TimeRange::new(MINUTES_PER_DAY, 60), None);
        assert_eq!(TimeRange::new(0, 0), None);
        assert_eq!(TimeRange::new(0, MINUTES_PER_DAY + 1), None);
        assert!(TimeRange::new(1439, MINUTES_PER_DAY).is_some());
    }

    #[test]
    fn clock_bounds_wrap_past_midnight() {
        let range = TimeRange::from_clock_bounds(1410, 30).expect("range");
        assert_eq!(range.start_minutes(), 1410);
        assert_eq!(range.duration_minutes(), 60);
        assert_eq!(range.end_minutes(), 1470);
        assert!(range.crosses_midnight());
    }

    #[test]
    fn equal_clock_bounds_are_a_full_day() {
        let range = TimeRange::from_clock_bounds(360, 360).expect("range");
        assert_eq!(range.duration_minutes(), MINUTES_PER_DAY);
    }

    #[test]
    fn between_wraps_times_of_day() {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("time");
        let overnight = TimeRange::between(time(23, 30), time(0, 30));
        assert_eq!(overnight, TimeRange::new(1410, 60).expect("range"));
        let morning = TimeRange::between(time(6, 0), time(7, 15));
        assert_eq!(morning, TimeRange::new(360, 75).expect("range"));
        assert_eq!(TimeRange::between(time(6, 0), time(6, 0)).duration_minutes(), MINUTES_PER_DAY);
    }

    #[test]
    fn overlap_is_half_open() {
        let a = TimeRange::new(360, 60).expect("a");
        let b = TimeRange::new(420, 60).expect("b");
        let c = TimeRange::new(390, 60).expect("c");
        assert!(!a.overlaps(b));
        assert!(!b.overlaps(a));
        assert!(a.overlaps(c));
        assert!(c.overlaps(b));
    }

    #[test]
    fn displays_as_twelve_hour_range() {
        assert_eq!(TimeRange::new(360, 60).expect("range").to_string(), "6:00 AM - 7:00 AM");
        assert_eq!(TimeRange::new(720, 45).expect("range").to_string(), "12:00 PM - 12:45 PM");
        assert_eq!(TimeRange::new(1410, 60).expect("range").to_string(), "11:30 PM - 12:30 AM");
        assert_eq!(TimeRange::new(1085, 55).expect("range").to_string(), "6:05 PM - 7:00 PM");
    }
}
