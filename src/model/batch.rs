// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

use super::ids::BatchId;
use super::weekday::WeekdaySet;
use crate::format::time_range::{parse_time_range, TimeRangeParseError};

/// Where a class takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    Online,
    #[default]
    Offline,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recurring slot of a batch: a display timing string, the days it runs and its mode.
///
/// The timing stays as entered; it is only resolved to minutes when a layout is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    timing: SmolStr,
    mode: Mode,
    days: WeekdaySet,
}

impl ScheduleEntry {
    pub fn new(timing: impl Into<SmolStr>, mode: Mode, days: WeekdaySet) -> Self {
        Self { timing: timing.into(), mode, days }
    }

    pub fn timing(&self) -> &str {
        &self.timing
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn days(&self) -> WeekdaySet {
        self.days
    }
}

/// A class batch as delivered by the data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    batch_id: BatchId,
    name: SmolStr,
    schedule: Vec<ScheduleEntry>,
}

impl Batch {
    pub fn new(batch_id: BatchId, name: impl Into<SmolStr>) -> Self {
        Self { batch_id, name: name.into(), schedule: Vec::new() }
    }

    pub fn with_entry(mut self, entry: ScheduleEntry) -> Self {
        self.schedule.push(entry);
        self
    }

    pub fn batch_id(&self) -> &BatchId {
        &self.batch_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_smol(&self) -> &SmolStr {
        &self.name
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut Vec<ScheduleEntry> {
        &mut self.schedule
    }

    /// Checks the rules the batch editor enforces before saving.
    ///
    /// The layout engine does not require a valid batch; it skips whatever it cannot place.
    /// This is for callers that want to reject bad records up front. All problems are reported,
    /// not just the first.
    pub fn validate(&self) -> Result<(), BatchValidationError> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(BatchIssue::EmptyName);
        }
        if self.schedule.is_empty() {
            issues.push(BatchIssue::NoSchedule);
        }

        for (entry_index, entry) in self.schedule.iter().enumerate() {
            if entry.days.is_empty() {
                issues.push(BatchIssue::NoDays { entry_index });
            }
            if let Err(error) = parse_time_range(entry.timing()) {
                issues.push(BatchIssue::InvalidTiming { entry_index, error });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(BatchValidationError { batch_id: self.batch_id.clone(), issues })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchIssue {
    #[error("batch name is empty")]
    EmptyName,
    #[error("batch has no schedule entries")]
    NoSchedule,
    #[error("schedule entry {entry_index} has no days")]
    NoDays { entry_index: usize },
    #[error("schedule entry {entry_index}: {error}")]
    InvalidTiming { entry_index: usize, error: TimeRangeParseError },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("batch {batch_id} is invalid: {}", join_issues(.issues))]
pub struct BatchValidationError {
    pub batch_id: BatchId,
    pub issues: Vec<BatchIssue>,
}

fn join_issues(issues: &[BatchIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
