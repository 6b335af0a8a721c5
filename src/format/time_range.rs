// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing and formatting of display timings such as `6:00 AM - 7:00 AM`.

use chrono::format::ParseErrorKind;
use chrono::NaiveTime;
use thiserror::Error;

use crate::model::time_range::{TimeRange, CLOCK_12H_DISPLAY};

/// Characters accepted between the two clock readings.
const RANGE_SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// `%p` matches either case and the space before it may be omitted.
const CLOCK_12H_INPUT: &str = "%I:%M %p";
const CLOCK_24H_INPUT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockParseError {
    #[error("clock time is empty")]
    Empty,
    #[error("hour or minute is out of range")]
    OutOfRange,
    #[error("expected a reading like {example}: {source}")]
    Malformed { example: &'static str, source: chrono::ParseError },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeRangeParseError {
    #[error("time range {text:?} has no '-' separator")]
    MissingSeparator { text: String },
    #[error("time range {text:?} has more than two parts")]
    TooManyParts { text: String },
    #[error("invalid clock time {part:?} in {text:?}: {reason}")]
    InvalidClock { text: String, part: String, reason: ClockParseError },
}

/// Parses `h:mm AM|PM - h:mm AM|PM` into a start offset and a positive duration.
///
/// The range may cross midnight (`11:30 PM - 12:30 AM` is 60 minutes); equal readings are read
/// as a full day.
pub fn parse_time_range(text: &str) -> Result<TimeRange, TimeRangeParseError> {
    let Some((start_part, end_part)) = text.split_once(RANGE_SEPARATORS) else {
        return Err(TimeRangeParseError::MissingSeparator { text: text.to_owned() });
    };
    if end_part.contains(RANGE_SEPARATORS) {
        return Err(TimeRangeParseError::TooManyParts { text: text.to_owned() });
    }

    let clock = |part: &str| {
        let part = part.trim();
        parse_clock_12h(part).map_err(|reason| TimeRangeParseError::InvalidClock {
            text: text.to_owned(),
            part: part.to_owned(),
            reason,
        })
    };
    let start = clock(start_part)?;
    let end = clock(end_part)?;

    Ok(TimeRange::between(start, end))
}

/// Parses one 12-hour reading (`6:00 AM`, `12:15pm`).
///
/// 12 AM is midnight and 12 PM is noon.
pub fn parse_clock_12h(part: &str) -> Result<NaiveTime, ClockParseError> {
    parse_clock(part, CLOCK_12H_INPUT, "6:00 AM")
}

/// Parses a 24-hour `HH:MM` reading, as produced by time input widgets.
pub fn parse_clock_24h(part: &str) -> Result<NaiveTime, ClockParseError> {
    parse_clock(part, CLOCK_24H_INPUT, "18:30")
}

fn parse_clock(
    part: &str,
    format: &str,
    example: &'static str,
) -> Result<NaiveTime, ClockParseError> {
    let part = part.trim();
    if part.is_empty() {
        return Err(ClockParseError::Empty);
    }
    NaiveTime::parse_from_str(part, format).map_err(|source| match source.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => ClockParseError::OutOfRange,
        _ => ClockParseError::Malformed { example, source },
    })
}

/// Builds the display timing for a schedule entry from two 24-hour inputs.
///
/// `format_time_range("06:00", "19:30")` gives `"6:00 AM - 7:30 PM"`, which
/// [`parse_time_range`] reads back to the same slot.
pub fn format_time_range(start_24h: &str, end_24h: &str) -> Result<String, ClockParseError> {
    let start = parse_clock_24h(start_24h)?;
    let end = parse_clock_24h(end_24h)?;
    Ok(format!("{} - {}", start.format(CLOCK_12H_DISPLAY), end.format(CLOCK_12H_DISPLAY)))
}
