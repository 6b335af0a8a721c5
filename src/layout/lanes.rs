// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::time_range::TimeRange;

/// Lane end times for one day. A studio rarely runs more than a few classes at once.
type LaneEnds = SmallVec<[u32; 8]>;

/// Where one input range landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneAssignment {
    /// Position of the range in the slice passed to [`assign_lanes`].
    pub input_index: usize,
    pub lane_index: usize,
}

/// Result of packing one day's ranges into lanes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanePacking {
    assignments: Vec<LaneAssignment>,
    lane_count: usize,
}

impl LanePacking {
    /// Assignments in placement order: ascending start time, ties in input order.
    pub fn assignments(&self) -> &[LaneAssignment] {
        &self.assignments
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Lane of the range at `input_index`, if it was part of the input.
    pub fn lane_of(&self, input_index: usize) -> Option<usize> {
        self.assignments
            .iter()
            .find(|assignment| assignment.input_index == input_index)
            .map(|assignment| assignment.lane_index)
    }
}

/// Greedy earliest-fit lane assignment for one day.
///
/// Ranges are visited by ascending start (stable, so equal starts keep input order). Each takes
/// the lowest-numbered lane whose last occupant has ended at or before its start; otherwise a new
/// lane is opened. Ranges are half-open, so a class ending at 7:00 and one starting at 7:00 share
/// a lane.
///
/// Visiting in start order makes the lane count equal to the day's peak number of concurrent
/// ranges, and two ranges in the same lane never overlap.
pub fn assign_lanes(ranges: &[TimeRange]) -> LanePacking {
    let mut order = (0..ranges.len()).collect::<Vec<_>>();
    order.sort_by_key(|&idx| ranges[idx].start_minutes());

    let mut lane_ends = LaneEnds::new();
    let mut assignments = Vec::with_capacity(ranges.len());

    for input_index in order {
        let range = ranges[input_index];
        let lane_index = match lane_ends.iter().position(|&end| end <= range.start_minutes()) {
            Some(lane) => {
                lane_ends[lane] = range.end_minutes();
                lane
            }
            None => {
                lane_ends.push(range.end_minutes());
                lane_ends.len() - 1
            }
        };
        assignments.push(LaneAssignment { input_index, lane_index });
    }

    LanePacking { assignments, lane_count: lane_ends.len() }
}
