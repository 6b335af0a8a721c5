// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;
use studio_timetable::config::TimetableConfig;
use studio_timetable::layout::{layout_week, GeometryOptions, BASE_Z_INDEX};
use studio_timetable::model::{Batch, BatchId, BatchIssue, Mode, Weekday};
use studio_timetable::render::render_week_unicode;
use studio_timetable::store::{BatchSource, JsonFileBatchSource};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("timetable").join(name)
}

fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn load_batches(name: &str) -> Vec<Batch> {
    JsonFileBatchSource::new(fixture_path(name))
        .batches()
        .unwrap_or_else(|err| panic!("expected {name} to load, got error: {err}"))
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn monday_overlap_stacks_b_and_reuses_lane_zero_for_c() {
    let week = layout_week(&load_batches("monday_overlap.json"), &GeometryOptions::default());
    let monday = week.day(Weekday::Monday).expect("monday");

    let lanes =
        monday.placements.iter().map(|p| (p.name.as_str(), p.lane_index)).collect::<Vec<_>>();
    assert_eq!(lanes, [("A", 0), ("B", 1), ("C", 0)]);
    assert_eq!(monday.lane_count, 2);

    let a = &monday.placements[0];
    assert_close(a.geometry.left_fraction, 60.0 / 1020.0);
    assert_close(a.geometry.width_fraction, 60.0 / 1020.0);
    assert_eq!(a.geometry.z_index, BASE_Z_INDEX);

    let b = &monday.placements[1];
    assert_eq!(b.mode, Mode::Online);
    assert_close(b.geometry.vertical_offset, 4.0);
    assert_eq!(b.geometry.z_index, BASE_Z_INDEX + 1);
}

#[test]
fn morning_config_renders_the_expected_chart() {
    let config = TimetableConfig::load(fixture_path("morning_config.json")).expect("config");
    let week = layout_week(&load_batches("monday_overlap.json"), &config.geometry_options());

    let b = &week.day(Weekday::Monday).expect("monday").placements[1];
    assert_close(b.geometry.vertical_offset, 6.0);

    let rendered = render_week_unicode(&week, config.chart_width).expect("render");
    let expected = read_fixture("monday_overlap_morning.txt");
    assert_eq!(rendered, expected.trim_end_matches('\n'));
}

#[test]
fn studio_week_source_orders_batches_by_name() {
    let names = load_batches("studio_week.json")
        .iter()
        .map(|b| b.name().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Moonlight Yin", "Pranayama", "Prenatal", "Sunrise Hatha", "Vinyasa Flow"]);
}

#[test]
fn only_the_unparseable_batch_fails_validation() {
    let batches = load_batches("studio_week.json");
    let invalid = batches
        .iter()
        .filter_map(|b| b.validate().err())
        .collect::<Vec<_>>();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].batch_id.as_str(), "9a44c0d2");
    assert!(matches!(
        invalid[0].issues.as_slice(),
        [BatchIssue::InvalidTiming { entry_index: 0, .. }]
    ));
}

#[rstest]
#[case::monday(Weekday::Monday, 2, &["Sunrise Hatha", "Vinyasa Flow"])]
#[case::tuesday(Weekday::Tuesday, 1, &["Sunrise Hatha", "Prenatal"])]
#[case::friday(Weekday::Friday, 0, &[])]
#[case::saturday(Weekday::Saturday, 1, &["Vinyasa Flow", "Moonlight Yin"])]
fn studio_week_days(
    #[case] day: Weekday,
    #[case] lane_count: usize,
    #[case] names: &[&str],
) {
    let week = layout_week(&load_batches("studio_week.json"), &GeometryOptions::default());
    let layout = week.day(day).expect("day");
    assert_eq!(layout.lane_count, lane_count, "{day}");
    assert_eq!(layout.placements.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), names);
}

#[test]
fn one_batch_can_sit_in_different_lanes_on_different_days() {
    let week = layout_week(&load_batches("studio_week.json"), &GeometryOptions::default());
    let flow = BatchId::new("5b0e7c1a").expect("id");

    let placements = week
        .placements_for(&flow)
        .map(|(day, p)| (day, p.lane_index, p.start_minutes, p.timing_label.to_string()))
        .collect::<Vec<_>>();
    assert_eq!(
        placements,
        [
            (Weekday::Monday, 1, 390, "6:30 AM - 7:30 AM".to_owned()),
            (Weekday::Wednesday, 1, 390, "6:30 AM - 7:30 AM".to_owned()),
            (Weekday::Saturday, 0, 1050, "5:30 PM – 6:30 PM".to_owned()),
        ]
    );
}

#[test]
fn json_output_is_ordered_monday_first_with_full_geometry() {
    let week = layout_week(&load_batches("studio_week.json"), &GeometryOptions::default());
    let value = serde_json::to_value(&week).expect("json");

    assert_eq!(value["window"]["start_hour"], 5);
    assert_eq!(value["window"]["end_hour"], 22);
    let days = value["days"].as_array().expect("days");
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Monday");
    assert_eq!(days[6]["day"], "Sunday");

    let night = &days[5]["placements"][1];
    assert_eq!(night["id"], "e71f0b35");
    assert_eq!(night["name"], "Moonlight Yin");
    assert_eq!(night["timing_label"], "11:30 PM - 12:30 AM");
    assert_eq!(night["mode"], "Online");
    assert_eq!(night["start_minutes"], 1410);
    assert_eq!(night["duration_minutes"], 60);
    assert_eq!(night["lane_index"], 0);
    assert_eq!(night["geometry"]["z_index"], 10);
}
