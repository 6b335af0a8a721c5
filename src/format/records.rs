// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON batch records as returned by the studio's data service.
//!
//! Two record shapes are accepted:
//! - current: `{ id, name, schedule: [{ timing, mode, days }] }`
//! - legacy single-slot rows: `{ id, name, timing, weekly_days, mode? }`
//!
//! Export always writes the current shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{Batch, BatchId, IdError, Mode, ScheduleEntry, Weekday, WeekdaySet};

/// Row ids are UUID strings in the hosted tables but plain integers in older exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub timing: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub days: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<ScheduleRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekly_days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("invalid batch JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("batch record {index} has an invalid id: {source}")]
    InvalidId {
        index: usize,
        #[source]
        source: IdError,
    },
}

/// Parses a JSON array of batch records into the model.
///
/// Unknown weekday names are dropped (the entry keeps its other days) and logged at debug level;
/// timings are kept verbatim and only resolved at layout time.
pub fn parse_batch_records(json: &str) -> Result<Vec<Batch>, RecordsError> {
    let records: Vec<BatchRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            batch_from_record(record).map_err(|source| RecordsError::InvalidId { index, source })
        })
        .collect()
}

/// Serializes batches back into the current record shape.
pub fn export_batch_records(batches: &[Batch]) -> Result<String, RecordsError> {
    let records = batches.iter().map(record_from_batch).collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn batch_from_record(record: BatchRecord) -> Result<Batch, IdError> {
    let batch_id = BatchId::new(record.id.into_string())?;
    let mut batch = Batch::new(batch_id, record.name);

    for entry in record.schedule {
        let days = weekday_set(batch.batch_id(), &entry.days);
        batch.schedule_mut().push(ScheduleEntry::new(entry.timing, entry.mode, days));
    }

    if batch.schedule().is_empty() {
        if let Some(timing) = record.timing {
            let days = weekday_set(batch.batch_id(), &record.weekly_days);
            let mode = record.mode.unwrap_or_default();
            batch.schedule_mut().push(ScheduleEntry::new(timing, mode, days));
        }
    }

    Ok(batch)
}

pub fn record_from_batch(batch: &Batch) -> BatchRecord {
    BatchRecord {
        id: RecordId::Text(batch.batch_id().as_str().to_owned()),
        name: batch.name().to_owned(),
        schedule: batch
            .schedule()
            .iter()
            .map(|entry| ScheduleRecord {
                timing: entry.timing().to_owned(),
                mode: entry.mode(),
                days: entry.days().iter().map(|day| day.name().to_owned()).collect(),
            })
            .collect(),
        timing: None,
        weekly_days: Vec::new(),
        mode: None,
    }
}

fn weekday_set(batch_id: &BatchId, names: &[String]) -> WeekdaySet {
    let mut days = WeekdaySet::new();
    for name in names {
        match name.parse::<Weekday>() {
            Ok(day) => {
                days.insert(day);
            }
            Err(err) => debug!(batch = %batch_id, %err, "ignoring unknown weekday"),
        }
    }
    days
}
