// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic studio weeks for benchmarks (no RNG).

use studio_timetable::layout::WeekLayout;
use studio_timetable::model::{
    Batch, BatchId, Mode, ScheduleEntry, TimeRange, Weekday, WeekdaySet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub batches: usize,
    pub entries_per_batch: usize,
    /// Every n-th entry carries an unparseable timing; 0 disables.
    pub broken_every: usize,
}

impl Params {
    pub const fn new(batches: usize, entries_per_batch: usize, broken_every: usize) -> Self {
        Self { batches, entries_per_batch, broken_every }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeCrowded,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeCrowded];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeCrowded => "large_crowded",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(12, 1, 0),
            Self::Medium => Params::new(60, 2, 17),
            Self::LargeCrowded => Params::new(400, 3, 11),
        }
    }
}

/// Starts spread over 5:00..23:45 with 30..120 minute classes; the latest run past midnight.
pub fn timing(index: usize) -> String {
    let start = 20 + (index * 7) % 76;
    let length = 2 + (index * 5) % 7;
    // Quarter-hour slots; the last start is 23:45.
    TimeRange::new(start as u32 * 15, length as u32 * 15).expect("quarter-hour slot").to_string()
}

fn days(index: usize) -> WeekdaySet {
    // Two to four days per entry, rotating through the week.
    let count = 2 + index % 3;
    (0..count).map(|offset| Weekday::ALL[(index + offset * 2) % 7]).collect()
}

pub fn week(params: Params) -> Vec<Batch> {
    (0..params.batches)
        .map(|b| {
            let id = BatchId::new(format!("bench-{b:04}")).expect("batch id");
            let mut batch = Batch::new(id, format!("Class {b:04}"));
            for e in 0..params.entries_per_batch {
                let index = b * params.entries_per_batch + e;
                let broken = params.broken_every != 0 && index % params.broken_every == 0;
                let text = if broken { "TBD".to_owned() } else { timing(index) };
                let mode = if index % 3 == 0 { Mode::Online } else { Mode::Offline };
                batch = batch.with_entry(ScheduleEntry::new(text, mode, days(index)));
            }
            batch
        })
        .collect()
}

pub fn fixture(case: Case) -> Vec<Batch> {
    week(case.params())
}

pub fn timings(count: usize) -> Vec<String> {
    (0..count).map(timing).collect()
}

pub fn checksum_week(week: &WeekLayout) -> u64 {
    let mut acc = 0u64;
    for day in &week.days {
        acc = acc.wrapping_mul(131).wrapping_add(day.lane_count as u64);
        for placement in &day.placements {
            acc = acc
                .wrapping_mul(131)
                .wrapping_add(u64::from(placement.start_minutes))
                .wrapping_add(placement.lane_index as u64)
                .wrapping_add(placement.geometry.z_index as u64);
        }
    }
    acc
}
