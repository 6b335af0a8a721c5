// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only access to batch records.
//!
//! The layout engine never talks to the data service directly. Callers hand it a
//! [`BatchSource`], which yields batches ordered by name so repeated layouts see the same input
//! order.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::RecordsError;
use crate::model::Batch;

pub mod demo;
pub mod json_file;

pub use demo::{demo_batches, demo_source};
pub use json_file::JsonFileBatchSource;

/// Anything that can list the studio's batches.
pub trait BatchSource {
    /// All batches, ordered by name (ascending).
    fn batches(&self) -> Result<Vec<Batch>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid batch records in {}: {source}", .path.display())]
    Records {
        path: PathBuf,
        #[source]
        source: RecordsError,
    },
}

/// Batches held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBatchSource {
    batches: Vec<Batch>,
}

impl InMemoryBatchSource {
    pub fn new(batches: Vec<Batch>) -> Self {
        Self { batches }
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl FromIterator<Batch> for InMemoryBatchSource {
    fn from_iter<I: IntoIterator<Item = Batch>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl BatchSource for InMemoryBatchSource {
    fn batches(&self) -> Result<Vec<Batch>, SourceError> {
        let mut batches = self.batches.clone();
        sort_by_name(&mut batches);
        Ok(batches)
    }
}

/// Stable, so batches sharing a name keep their stored order.
pub(crate) fn sort_by_name(batches: &mut [Batch]) {
    batches.sort_by(|a, b| a.name().cmp(b.name()));
}

#[cfg(test)]
mod tests {
    use super::{BatchSource, InMemoryBatchSource};
    use crate::model::fixtures;
    use crate::model::{Mode, Weekday};

    #[test]
    fn in_memory_source_orders_by_name() {
        let source = fixtures::studio_week().into_iter().rev().collect::<InMemoryBatchSource>();
        let names = source
            .batches()
            .expect("batches")
            .iter()
            .map(|b| b.name().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Moonlight Yin", "Pranayama", "Sunrise Hatha", "Vinyasa Flow"]);
    }

    #[test]
    fn equal_names_keep_their_stored_order() {
        let monday = [Weekday::Monday].into();
        let source = InMemoryBatchSource::new(vec![
            fixtures::batch("b2", "Yin", "6:00 AM - 7:00 AM", Mode::Offline, monday),
            fixtures::batch("b1", "Yin", "8:00 AM - 9:00 AM", Mode::Offline, monday),
        ]);
        let ids = source
            .batches()
            .expect("batches")
            .iter()
            .map(|b| b.batch_id().to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["b2", "b1"]);
    }

    #[test]
    fn empty_source_is_valid() {
        let source = InMemoryBatchSource::default();
        assert!(source.is_empty());
        assert!(source.batches().expect("batches").is_empty());
    }
}
