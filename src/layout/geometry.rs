// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::time_range::TimeRange;

/// Base stacking order of bars; lane `n` is drawn at `BASE_Z_INDEX + n`.
pub const BASE_Z_INDEX: usize = 10;

/// Default per-lane vertical shift, in percent of the day row height.
pub const DEFAULT_STACK_OFFSET: f64 = 4.0;

/// The slice of the day shown on the timeline, in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow", into = "RawWindow")]
pub struct VisibleWindow {
    start_hour: u8,
    end_hour: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window end hour {end_hour} must be at most 24")]
    EndPastMidnight { end_hour: u8 },
    #[error("window start hour {start_hour} must be before end hour {end_hour}")]
    Empty { start_hour: u8, end_hour: u8 },
    #[error("window must look like `<start>-<end>` in whole hours, got `{text}`")]
    Malformed { text: String },
}

impl VisibleWindow {
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self, WindowError> {
        if end_hour > 24 {
            return Err(WindowError::EndPastMidnight { end_hour });
        }
        if start_hour >= end_hour {
            return Err(WindowError::Empty { start_hour, end_hour });
        }
        Ok(Self { start_hour, end_hour })
    }

    pub fn start_hour(self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(self) -> u8 {
        self.end_hour
    }

    pub fn hours(self) -> u8 {
        self.end_hour - self.start_hour
    }

    pub fn start_minutes(self) -> u32 {
        u32::from(self.start_hour) * 60
    }

    pub fn total_minutes(self) -> u32 {
        u32::from(self.hours()) * 60
    }

    /// Position of `minutes` along the window; negative before it, above 1 after it.
    pub fn fraction_of(self, minutes: u32) -> f64 {
        (f64::from(minutes) - f64::from(self.start_minutes())) / f64::from(self.total_minutes())
    }

    /// Header labels for every hour from start to end inclusive.
    pub fn hour_ticks(self) -> Vec<HourTick> {
        let hours = f64::from(self.hours());
        (0..=self.hours())
            .map(|i| HourTick { hour: self.start_hour + i, fraction: f64::from(i) / hours })
            .collect()
    }

    /// Dashed grid lines at each interior hour boundary and the right edge.
    pub fn grid_lines(self) -> Vec<f64> {
        let hours = f64::from(self.hours());
        (1..=self.hours()).map(|i| f64::from(i) / hours).collect()
    }
}

impl Default for VisibleWindow {
    /// 5:00 to 22:00.
    fn default() -> Self {
        Self { start_hour: 5, end_hour: 22 }
    }
}

/// Parses `"6-21"` (start and end hour).
impl FromStr for VisibleWindow {
    type Err = WindowError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || WindowError::Malformed { text: text.to_owned() };
        let (start, end) = text.split_once('-').ok_or_else(malformed)?;
        let start_hour = start.trim().parse::<u8>().map_err(|_| malformed())?;
        let end_hour = end.trim().parse::<u8>().map_err(|_| malformed())?;
        Self::new(start_hour, end_hour)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawWindow {
    start_hour: u8,
    end_hour: u8,
}

impl TryFrom<RawWindow> for VisibleWindow {
    type Error = WindowError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}

impl From<VisibleWindow> for RawWindow {
    fn from(window: VisibleWindow) -> Self {
        Self { start_hour: window.start_hour, end_hour: window.end_hour }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourTick {
    pub hour: u8,
    pub fraction: f64,
}

impl HourTick {
    /// `"5:00"`, `"13:00"`.
    pub fn label(self) -> String {
        format!("{}:00", self.hour)
    }
}

/// Everything the geometry step needs besides the session itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryOptions {
    pub window: VisibleWindow,
    pub stack_offset: f64,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self { window: VisibleWindow::default(), stack_offset: DEFAULT_STACK_OFFSET }
    }
}

/// Proportional placement of one bar on a day track.
///
/// Fractions are relative to the visible window and are not clipped: a class outside the window
/// yields `left_fraction < 0` or `left_fraction + width_fraction > 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarGeometry {
    pub left_fraction: f64,
    pub width_fraction: f64,
    pub vertical_offset: f64,
    pub z_index: usize,
}

impl BarGeometry {
    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }

    pub fn is_within_window(&self) -> bool {
        self.left_fraction >= 0.0 && self.right_fraction() <= 1.0
    }

    /// True when any part of the bar is visible.
    pub fn intersects_window(&self) -> bool {
        self.left_fraction < 1.0 && self.right_fraction() > 0.0
    }
}

pub fn to_geometry(range: TimeRange, lane_index: usize, options: &GeometryOptions) -> BarGeometry {
    let window = options.window;
    BarGeometry {
        left_fraction: window.fraction_of(range.start_minutes()),
        width_fraction: f64::from(range.duration_minutes()) / f64::from(window.total_minutes()),
        vertical_offset: lane_index as f64 * options.stack_offset,
        z_index: BASE_Z_INDEX + lane_index,
    }
}
