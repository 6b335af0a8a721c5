// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use super::text::{canvas_to_string_trimmed, fit_to_width};
use super::{Canvas, CanvasError, UNICODE_BOX_CROSS, UNICODE_BOX_VERTICAL};
use crate::layout::timetable::{SessionPlacement, WeekLayout};
use crate::layout::VisibleWindow;
use crate::model::Mode;

/// Narrowest track that still leaves room for readable bars.
pub const MIN_TRACK_WIDTH: usize = 10;
/// Widest track accepted; keeps the canvas allocation and column math bounded.
pub const MAX_TRACK_WIDTH: usize = 1024;

/// Column where the day track starts: `"Mon │"`.
const TRACK_X: usize = 5;
const SEPARATOR_X: usize = 4;
const HEADER_ROWS: usize = 2;
const LEGEND: &str = "[…] offline  (…) online";
const GRID_MARK: char = '·';
const BAR_FILL: char = '─';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableRenderError {
    #[error("track width {width} is below the minimum of {min}")]
    TrackTooNarrow { width: usize, min: usize },
    #[error("track width {width} exceeds the maximum of {max}")]
    TrackTooWide { width: usize, max: usize },
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Renders a week as a Unicode chart, one row per lane and day.
///
/// Each of the `track_width` columns covers an equal slice of the visible window. Offline bars
/// are drawn as `[name──]`, online bars as `(name──)`; a bar cut off by the window edge shows
/// `<` or `>` on that side. Days without classes still get one row.
pub fn render_week_unicode(
    week: &WeekLayout,
    track_width: usize,
) -> Result<String, TimetableRenderError> {
    if track_width < MIN_TRACK_WIDTH {
        return Err(TimetableRenderError::TrackTooNarrow {
            width: track_width,
            min: MIN_TRACK_WIDTH,
        });
    }
    if track_width > MAX_TRACK_WIDTH {
        return Err(TimetableRenderError::TrackTooWide {
            width: track_width,
            max: MAX_TRACK_WIDTH,
        });
    }

    let day_rows = week.days.iter().map(|day| day.lane_count.max(1)).sum::<usize>();
    let chart_width = TRACK_X + track_width;
    let width = chart_width.max(LEGEND.chars().count());
    let height = HEADER_ROWS + day_rows + 2;
    let mut canvas = Canvas::new(width, height)?;
    let track = Track { window: week.window, width: track_width };

    draw_header(&mut canvas, &track, chart_width)?;

    let mut y = HEADER_ROWS;
    for day in &week.days {
        let rows = day.lane_count.max(1);
        canvas.write_str(0, y, day.day.short_name())?;
        for lane in 0..rows {
            canvas.set(SEPARATOR_X, y + lane, UNICODE_BOX_VERTICAL)?;
            for col in track.grid_columns() {
                canvas.set(TRACK_X + col, y + lane, GRID_MARK)?;
            }
        }
        for placement in &day.placements {
            draw_bar(&mut canvas, &track, y + placement.lane_index, placement)?;
        }
        y += rows;
    }

    canvas.write_str(0, y + 1, LEGEND)?;

    Ok(canvas_to_string_trimmed(&canvas))
}

/// Maps minutes onto track columns with integer arithmetic so bar edges are exact.
struct Track {
    window: VisibleWindow,
    width: usize,
}

impl Track {
    /// First column touched by `minutes` (may be negative or past the end).
    fn floor_col(&self, minutes: i64) -> i64 {
        let offset = minutes - i64::from(self.window.start_minutes());
        (offset * self.width as i64).div_euclid(i64::from(self.window.total_minutes()))
    }

    /// One past the last column touched by an interval ending at `minutes`.
    fn ceil_col(&self, minutes: i64) -> i64 {
        let offset = minutes - i64::from(self.window.start_minutes());
        let total = i64::from(self.window.total_minutes());
        -((-(offset * self.width as i64)).div_euclid(total))
    }

    fn hour_col(&self, hour_offset: u8) -> usize {
        let col = usize::from(hour_offset) * self.width / usize::from(self.window.hours());
        col.min(self.width - 1)
    }

    /// Interior hour boundaries.
    fn grid_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.window.hours()).map(|i| self.hour_col(i))
    }
}

fn draw_header(canvas: &mut Canvas, track: &Track, chart_width: usize) -> Result<(), CanvasError> {
    let mut next_free = 0usize;
    for (i, tick) in track.window.hour_ticks().into_iter().enumerate() {
        // `hour_ticks` yields one tick per hour offset, starting at zero.
        let col = track.hour_col(i as u8);
        let label = tick.label();
        let fits = col + label.len() <= track.width;
        if col >= next_free && fits {
            canvas.write_str(TRACK_X + col, 0, &label)?;
            next_free = col + label.len() + 1;
        }
    }

    canvas.draw_hline(0, chart_width - 1, 1)?;
    canvas.set(SEPARATOR_X, 1, UNICODE_BOX_CROSS)?;
    Ok(())
}

fn draw_bar(
    canvas: &mut Canvas,
    track: &Track,
    y: usize,
    placement: &SessionPlacement,
) -> Result<(), CanvasError> {
    let start = i64::from(placement.start_minutes);
    let end = start + i64::from(placement.duration_minutes);
    let first = track.floor_col(start);
    // Zero-length bars still occupy one column.
    let past_last = track.ceil_col(end).max(first + 1);

    let width = track.width as i64;
    if past_last <= 0 || first >= width {
        return Ok(());
    }

    let x0 = first.max(0) as usize;
    let x1 = (past_last.min(width) - 1) as usize;
    let len = x1 - x0 + 1;

    let (open, close) = match placement.mode {
        Mode::Offline => ('[', ']'),
        Mode::Online => ('(', ')'),
    };
    let open = if first < 0 { '<' } else { open };
    let close = if past_last > width { '>' } else { close };

    let bar = match len {
        1 => '█'.to_string(),
        2 => format!("{open}{close}"),
        _ => format!("{open}{}{close}", fit_to_width(&placement.name, len - 2, BAR_FILL)),
    };
    canvas.write_str(TRACK_X + x0, y, &bar)
}
