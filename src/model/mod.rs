// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Batches carry schedule entries as entered in the studio dashboard; sessions are the resolved,
//! layout-ready view of one entry.

pub mod batch;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod session;
pub mod time_range;
pub mod weekday;

pub use batch::{Batch, BatchIssue, BatchValidationError, Mode, ScheduleEntry};
pub use ids::{BatchId, Id, IdError};
pub use session::Session;
pub use time_range::{TimeRange, MINUTES_PER_DAY};
pub use weekday::{ParseWeekdayError, Weekday, WeekdaySet};
