// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::batch::{Batch, Mode, ScheduleEntry};
use super::ids::BatchId;
use super::weekday::{Weekday, WeekdaySet};

fn bid(value: &str) -> BatchId {
    BatchId::new(value).expect("batch id")
}

pub(crate) fn batch(id: &str, name: &str, timing: &str, mode: Mode, days: WeekdaySet) -> Batch {
    Batch::new(bid(id), name).with_entry(ScheduleEntry::new(timing, mode, days))
}

/// A(6:00-7:00), B(6:30-7:30), C(8:00-9:00), all on Monday.
pub(crate) fn monday_overlap() -> Vec<Batch> {
    let monday: WeekdaySet = [Weekday::Monday].into();
    vec![
        batch("a", "A", "6:00 AM - 7:00 AM", Mode::Offline, monday),
        batch("b", "B", "6:30 AM - 7:30 AM", Mode::Online, monday),
        batch("c", "C", "8:00 AM - 9:00 AM", Mode::Offline, monday),
    ]
}

/// A small studio week with a multi-entry batch, a malformed timing and an overnight class.
pub(crate) fn studio_week() -> Vec<Batch> {
    let weekdays: WeekdaySet =
        [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday].into();

    vec![
        batch("b-sunrise", "Sunrise Hatha", "6:00 AM - 7:00 AM", Mode::Offline, weekdays),
        Batch::new(bid("b-flow"), "Vinyasa Flow")
            .with_entry(ScheduleEntry::new(
                "6:30 AM - 7:30 AM",
                Mode::Online,
                [Weekday::Monday, Weekday::Wednesday].into(),
            ))
            .with_entry(ScheduleEntry::new(
                "5:30 PM - 6:30 PM",
                Mode::Offline,
                [Weekday::Saturday].into(),
            )),
        batch(
            "b-broken",
            "Pranayama",
            "sometime in the morning",
            Mode::Offline,
            [Weekday::Monday].into(),
        ),
        batch(
            "b-night",
            "Moonlight Yin",
            "11:30 PM - 12:30 AM",
            Mode::Online,
            [Weekday::Saturday].into(),
        ),
    ]
}
