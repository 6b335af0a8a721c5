// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::InMemoryBatchSource;
use crate::model::{Batch, BatchId, IdError, Mode, ScheduleEntry, Weekday};

use crate::model::Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};

const WEEKDAYS: [Weekday; 5] = [Monday, Tuesday, Wednesday, Thursday, Friday];

/// A representative studio week for `--demo` and quick manual checks.
///
/// Includes overlapping morning classes, a batch with two schedule slots, and a late class
/// that runs past midnight.
pub fn demo_batches() -> Result<Vec<Batch>, IdError> {
    Ok(vec![
        batch("demo-sunrise", "Sunrise Hatha")?.with_entry(ScheduleEntry::new(
            "6:00 AM - 7:00 AM",
            Mode::Offline,
            WEEKDAYS.into(),
        )),
        batch("demo-vinyasa", "Vinyasa Flow")?
            .with_entry(ScheduleEntry::new(
                "6:30 AM - 7:30 AM",
                Mode::Online,
                [Monday, Wednesday, Friday].into(),
            ))
            .with_entry(ScheduleEntry::new("9:00 AM - 10:30 AM", Mode::Offline, [Saturday].into())),
        batch("demo-power", "Power Yoga")?.with_entry(ScheduleEntry::new(
            "7:00 AM - 8:00 AM",
            Mode::Offline,
            [Monday, Wednesday].into(),
        )),
        batch("demo-prenatal", "Prenatal")?.with_entry(ScheduleEntry::new(
            "10:00 AM - 11:00 AM",
            Mode::Offline,
            [Tuesday, Thursday].into(),
        )),
        batch("demo-lunch", "Lunchtime Stretch")?.with_entry(ScheduleEntry::new(
            "12:30 PM - 1:15 PM",
            Mode::Online,
            WEEKDAYS.into(),
        )),
        batch("demo-yin", "Yin & Restore")?.with_entry(ScheduleEntry::new(
            "6:00 PM - 7:15 PM",
            Mode::Offline,
            [Tuesday, Thursday, Sunday].into(),
        )),
        batch("demo-pranayama", "Pranayama")?.with_entry(ScheduleEntry::new(
            "6:30 PM - 7:00 PM",
            Mode::Online,
            [Tuesday, Sunday].into(),
        )),
        batch("demo-moon", "Moonlight Nidra")?.with_entry(ScheduleEntry::new(
            "9:30 PM - 10:30 PM",
            Mode::Online,
            [Friday, Saturday].into(),
        )),
        batch("demo-midnight", "Midnight Meditation")?.with_entry(ScheduleEntry::new(
            "11:30 PM - 12:15 AM",
            Mode::Online,
            [Saturday].into(),
        )),
    ])
}

/// [`demo_batches`] behind the same seam as real data.
pub fn demo_source() -> Result<InMemoryBatchSource, IdError> {
    demo_batches().map(InMemoryBatchSource::new)
}

fn batch(id: &str, name: &str) -> Result<Batch, IdError> {
    Ok(Batch::new(BatchId::new(id)?, name))
}
