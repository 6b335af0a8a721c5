// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Timetable layout.
//!
//! This module packs each day's sessions into lanes and maps them onto a proportional timeline.
//! Everything here is pure: the same batches always produce the same layout.

pub mod geometry;
pub mod lanes;
pub mod timetable;

pub use geometry::{
    to_geometry, BarGeometry, GeometryOptions, HourTick, VisibleWindow, WindowError,
    BASE_Z_INDEX, DEFAULT_STACK_OFFSET,
};
pub use lanes::{assign_lanes, LaneAssignment, LanePacking};
pub use timetable::{
    collect_sessions, layout_day, layout_sessions, layout_week, DayLayout, SessionPlacement,
    WeekLayout,
};
