// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{sort_by_name, BatchSource, SourceError};
use crate::format::parse_batch_records;
use crate::model::Batch;

/// Reads a JSON array of batch records from disk on every call.
///
/// The file is never written; edits made by the data service show up on the next read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileBatchSource {
    path: PathBuf,
}

impl JsonFileBatchSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BatchSource for JsonFileBatchSource {
    fn batches(&self) -> Result<Vec<Batch>, SourceError> {
        let json = fs::read_to_string(&self.path)
            .map_err(|source| SourceError::Io { path: self.path.clone(), source })?;
        let mut batches = parse_batch_records(&json)
            .map_err(|source| SourceError::Records { path: self.path.clone(), source })?;
        sort_by_name(&mut batches);

        let entries = batches.iter().map(|b| b.schedule().len()).sum::<usize>();
        info!(
            path = %self.path.display(),
            batches = batches.len(),
            entries,
            "loaded batch records"
        );
        Ok(batches)
    }
}
