// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::batch::{Batch, Mode, ScheduleEntry};
use super::ids::BatchId;
use super::time_range::TimeRange;
use super::weekday::{Weekday, WeekdaySet};
use crate::format::time_range::{parse_time_range, TimeRangeParseError};

/// A schedule entry with its timing resolved, ready for lane assignment.
///
/// Sessions are derived on every layout pass and never stored. A session cannot exist without a
/// resolved [`TimeRange`]; entries whose timing fails to parse never become sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    source_id: BatchId,
    label: SmolStr,
    timing_text: SmolStr,
    range: TimeRange,
    mode: Mode,
    days: WeekdaySet,
}

impl Session {
    pub fn new(
        source_id: BatchId,
        label: impl Into<SmolStr>,
        timing_text: impl Into<SmolStr>,
        range: TimeRange,
        mode: Mode,
        days: WeekdaySet,
    ) -> Self {
        Self {
            source_id,
            label: label.into(),
            timing_text: timing_text.into(),
            range,
            mode,
            days,
        }
    }

    /// Resolves one schedule entry of `batch`.
    pub fn from_entry(batch: &Batch, entry: &ScheduleEntry) -> Result<Self, TimeRangeParseError> {
        let range = parse_time_range(entry.timing())?;
        Ok(Self {
            source_id: batch.batch_id().clone(),
            label: batch.name_smol().clone(),
            timing_text: SmolStr::new(entry.timing()),
            range,
            mode: entry.mode(),
            days: entry.days(),
        })
    }

    pub fn source_id(&self) -> &BatchId {
        &self.source_id
    }

    pub fn label(&self) -> &SmolStr {
        &self.label
    }

    pub fn timing_text(&self) -> &SmolStr {
        &self.timing_text
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn start_minutes(&self) -> u32 {
        self.range.start_minutes()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.range.duration_minutes()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn days(&self) -> WeekdaySet {
        self.days
    }

    pub fn recurs_on(&self, day: Weekday) -> bool {
        self.days.contains(day)
    }
}
