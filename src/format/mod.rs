// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text formats: display timings and the data service's JSON batch records.

pub mod records;
pub mod time_range;

pub use records::{
    batch_from_record, export_batch_records, parse_batch_records, record_from_batch, BatchRecord,
    RecordId, RecordsError, ScheduleRecord,
};
pub use time_range::{
    format_time_range, parse_clock_12h, parse_clock_24h, parse_time_range, ClockParseError,
    TimeRangeParseError,
};
