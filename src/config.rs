// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display settings for the timetable.
//!
//! Settings come from an optional JSON file. Missing fields take their defaults, so `{}` is a
//! valid config:
//!
//! ```json
//! { "window": { "start_hour": 6, "end_hour": 21 }, "stack_offset": 4.0, "chart_width": 68 }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{GeometryOptions, VisibleWindow, DEFAULT_STACK_OFFSET};
use crate::render::{MAX_TRACK_WIDTH, MIN_TRACK_WIDTH};

pub const DEFAULT_CHART_WIDTH: usize = 68;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimetableConfig {
    #[serde(default)]
    pub window: VisibleWindow,
    #[serde(default = "default_stack_offset")]
    pub stack_offset: f64,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_stack_offset() -> f64 {
    DEFAULT_STACK_OFFSET
}

fn default_chart_width() -> usize {
    DEFAULT_CHART_WIDTH
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            window: VisibleWindow::default(),
            stack_offset: DEFAULT_STACK_OFFSET,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("stack_offset must be a finite number >= 0, got {value}")]
    InvalidStackOffset { value: f64 },
    #[error("chart_width must be at least {min}, got {value}")]
    ChartTooNarrow { value: usize, min: usize },
    #[error("chart_width must be at most {max}, got {value}")]
    ChartTooWide { value: usize, max: usize },
}

impl TimetableConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields serde cannot. The window validates itself on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stack_offset.is_finite() || self.stack_offset < 0.0 {
            return Err(ConfigError::InvalidStackOffset { value: self.stack_offset });
        }
        if self.chart_width < MIN_TRACK_WIDTH {
            return Err(ConfigError::ChartTooNarrow {
                value: self.chart_width,
                min: MIN_TRACK_WIDTH,
            });
        }
        if self.chart_width > MAX_TRACK_WIDTH {
            return Err(ConfigError::ChartTooWide {
                value: self.chart_width,
                max: MAX_TRACK_WIDTH,
            });
        }
        Ok(())
    }

    pub fn geometry_options(&self) -> GeometryOptions {
        GeometryOptions { window: self.window, stack_offset: self.stack_offset }
    }
}
