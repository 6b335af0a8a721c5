// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Studio Timetable CLI entrypoint.
//!
//! Reads batch records from a JSON file (or the built-in demo week) and prints the weekly
//! timetable as a Unicode chart, or as JSON with `--json`.

use std::error::Error;

use studio_timetable::config::TimetableConfig;
use studio_timetable::layout::{layout_week, VisibleWindow, WeekLayout};
use studio_timetable::model::{Batch, BatchId};
use studio_timetable::render::render_week_unicode;
use studio_timetable::store::{demo_source, BatchSource, JsonFileBatchSource};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <batches.json> [--config <path>] [--window <start>-<end>] [--width <cols>] [--json] [--details <batch-id>]\n  {program} --demo [--config <path>] [--window <start>-<end>] [--width <cols>] [--json] [--details <batch-id>]\n\n<batches.json> holds a JSON array of batch records.\n--demo uses a built-in studio week and cannot be combined with <batches.json>.\n\n--config reads display settings from a JSON file; --window (e.g. 6-21) and --width override it.\n--json prints the per-day layout as JSON instead of the chart.\n--details lists every placement of one batch across the week.\n\nSet RUST_LOG (e.g. RUST_LOG=debug) to see skipped timings and load summaries on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    batches_path: Option<String>,
    demo: bool,
    config_path: Option<String>,
    window: Option<VisibleWindow>,
    width: Option<usize>,
    json: bool,
    details: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--window" => {
                if options.window.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.window = Some(raw.parse().map_err(|_| ())?);
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.width = Some(raw.parse().map_err(|_| ())?);
            }
            "--details" => {
                if options.details.is_some() {
                    return Err(());
                }
                options.details = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.batches_path.is_some() {
                    return Err(());
                }
                options.batches_path = Some(arg);
            }
        }
    }

    if options.demo == options.batches_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// File settings first, then command-line overrides.
fn resolve_config(options: &CliOptions) -> Result<TimetableConfig, Box<dyn Error>> {
    let mut config = match &options.config_path {
        Some(path) => TimetableConfig::load(path)?,
        None => TimetableConfig::default(),
    };
    if let Some(window) = options.window {
        config.window = window;
    }
    if let Some(width) = options.width {
        config.chart_width = width;
    }
    config.validate()?;
    Ok(config)
}

fn warn_invalid_batches(batches: &[Batch]) {
    for batch in batches {
        if let Err(err) = batch.validate() {
            warn!("{err}");
        }
    }
}

fn render_details(week: &WeekLayout, batch_id: &BatchId) -> Option<String> {
    let mut placements = week.placements_for(batch_id).peekable();
    let (_, first) = placements.peek()?;
    let mut out = format!("{} ({})", first.name, first.id);
    for (day, placement) in placements {
        out.push_str(&format!(
            "\n  {:<3}  {:<21}  {:<7}  lane {}",
            day.short_name(),
            placement.timing_label.as_str(),
            placement.mode.as_str(),
            placement.lane_index
        ));
    }
    Some(out)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "studio-timetable".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();
        let config = resolve_config(&options)?;

        let batches = match &options.batches_path {
            Some(path) => JsonFileBatchSource::new(path).batches()?,
            None => demo_source()?.batches()?,
        };
        warn_invalid_batches(&batches);

        let week = layout_week(&batches, &config.geometry_options());
        info!(
            batches = batches.len(),
            placements = week.placement_count(),
            "laid out week"
        );

        if let Some(raw_id) = &options.details {
            let batch_id = BatchId::new(raw_id.clone())?;
            let details = render_details(&week, &batch_id)
                .ok_or_else(|| format!("no scheduled sessions for batch `{batch_id}`"))?;
            println!("{details}");
            return Ok(());
        }

        if options.json {
            println!("{}", serde_json::to_string_pretty(&week)?);
        } else {
            println!("{}", render_week_unicode(&week, config.chart_width)?);
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("studio-timetable: {err}");
        std::process::exit(1);
    }
}
