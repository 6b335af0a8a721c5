// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Studio Timetable: weekly schedule layout for yoga studio batches.
//!
//! Batches carry display timings such as `"6:00 AM - 7:00 AM"`. The crate resolves those into
//! minute ranges, packs each weekday's overlapping classes into lanes, and maps every class onto
//! a proportional bar inside a visible time window. A Unicode renderer draws the result for
//! terminals.
//!
//! ```
//! use studio_timetable::layout::{layout_week, GeometryOptions};
//! use studio_timetable::model::{Batch, BatchId, Mode, ScheduleEntry, Weekday};
//!
//! let batch = Batch::new(BatchId::new("b1").unwrap(), "Sunrise Hatha").with_entry(
//!     ScheduleEntry::new("6:00 AM - 7:00 AM", Mode::Offline, [Weekday::Monday].into()),
//! );
//! let week = layout_week(&[batch], &GeometryOptions::default());
//! assert_eq!(week.day(Weekday::Monday).unwrap().lane_count, 1);
//! ```

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
