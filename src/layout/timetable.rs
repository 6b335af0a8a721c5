// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rayon::prelude::*;
use serde::Serialize;
use smol_str::SmolStr;
use tracing::debug;

use super::geometry::{to_geometry, BarGeometry, GeometryOptions, VisibleWindow};
use super::lanes::assign_lanes;
use crate::model::{Batch, BatchId, Mode, Session, TimeRange, Weekday};

/// One session placed on one day's track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPlacement {
    pub id: BatchId,
    pub name: SmolStr,
    pub timing_label: SmolStr,
    pub mode: Mode,
    pub start_minutes: u32,
    pub duration_minutes: u32,
    pub lane_index: usize,
    pub geometry: BarGeometry,
}

impl SessionPlacement {
    pub fn range(&self) -> Option<TimeRange> {
        TimeRange::new(self.start_minutes, self.duration_minutes)
    }
}

/// Layout of a single weekday row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    pub day: Weekday,
    pub lane_count: usize,
    /// Ordered by start time, ties in input order.
    pub placements: Vec<SessionPlacement>,
}

impl DayLayout {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn lane(&self, lane_index: usize) -> impl Iterator<Item = &SessionPlacement> {
        self.placements.iter().filter(move |p| p.lane_index == lane_index)
    }
}

/// The full Monday..Sunday timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout {
    pub window: VisibleWindow,
    pub days: Vec<DayLayout>,
}

impl WeekLayout {
    pub fn day(&self, day: Weekday) -> Option<&DayLayout> {
        self.days.iter().find(|layout| layout.day == day)
    }

    /// Every placement of one batch across the week, in day order.
    pub fn placements_for<'a>(
        &'a self,
        batch_id: &'a BatchId,
    ) -> impl Iterator<Item = (Weekday, &'a SessionPlacement)> + 'a {
        self.days.iter().flat_map(move |layout| {
            layout
                .placements
                .iter()
                .filter(move |p| &p.id == batch_id)
                .map(move |p| (layout.day, p))
        })
    }

    pub fn placement_count(&self) -> usize {
        self.days.iter().map(|layout| layout.placements.len()).sum()
    }
}

/// Resolves every schedule entry of every batch, dropping entries whose timing does not parse.
///
/// Dropping is silent to the caller; each skipped entry is logged at debug level.
pub fn collect_sessions(batches: &[Batch]) -> Vec<Session> {
    let mut sessions = Vec::new();
    for batch in batches {
        for entry in batch.schedule() {
            match Session::from_entry(batch, entry) {
                Ok(session) => sessions.push(session),
                Err(err) => {
                    debug!(
                        batch = %batch.batch_id(),
                        timing = entry.timing(),
                        %err,
                        "skipping unparseable timing"
                    );
                }
            }
        }
    }
    sessions
}

/// Lays out the sessions recurring on `day`.
///
/// Lanes are packed for this day alone; the same session may sit in different lanes on
/// different days.
pub fn layout_day(sessions: &[Session], day: Weekday, options: &GeometryOptions) -> DayLayout {
    let todays = sessions.iter().filter(|s| s.recurs_on(day)).collect::<Vec<_>>();
    let ranges = todays.iter().map(|s| s.range()).collect::<Vec<_>>();
    let packing = assign_lanes(&ranges);

    let placements = packing
        .assignments()
        .iter()
        .map(|assignment| {
            let session = todays[assignment.input_index];
            SessionPlacement {
                id: session.source_id().clone(),
                name: session.label().clone(),
                timing_label: session.timing_text().clone(),
                mode: session.mode(),
                start_minutes: session.start_minutes(),
                duration_minutes: session.duration_minutes(),
                lane_index: assignment.lane_index,
                geometry: to_geometry(session.range(), assignment.lane_index, options),
            }
        })
        .collect();

    DayLayout { day, lane_count: packing.lane_count(), placements }
}

/// Lays out the whole week from already-resolved sessions.
///
/// Days are independent, so they are computed in parallel; the result is always in
/// Monday..Sunday order.
pub fn layout_sessions(sessions: &[Session], options: &GeometryOptions) -> WeekLayout {
    let days = Weekday::ALL
        .into_par_iter()
        .map(|day| layout_day(sessions, day, options))
        .collect::<Vec<_>>();

    WeekLayout { window: options.window, days }
}

/// Full pipeline: batches -> sessions -> per-day lanes -> geometry.
pub fn layout_week(batches: &[Batch], options: &GeometryOptions) -> WeekLayout {
    let sessions = collect_sessions(batches);
    layout_sessions(&sessions, options)
}
