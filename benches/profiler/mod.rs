// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-StudioTimetable-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Studio Timetable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Reads `name` from the environment, falling back to `default` when unset or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(default)
}

/// Criterion with a flamegraph profiler attached.
///
/// Layout passes are short, so the defaults favour more samples over longer measurement.
/// `TIMETABLE_PROFILE_FREQ`, `TIMETABLE_BENCH_SAMPLES`, `TIMETABLE_BENCH_WARMUP_SECS` and
/// `TIMETABLE_BENCH_MEASURE_SECS` override them.
pub fn criterion() -> Criterion {
    let frequency = env_or("TIMETABLE_PROFILE_FREQ", 100_i32).clamp(1, 1000);
    let samples = env_or("TIMETABLE_BENCH_SAMPLES", 100_usize).clamp(10, 500);
    let warmup = env_or("TIMETABLE_BENCH_WARMUP_SECS", 2_u64).clamp(1, 60);
    let measure = env_or("TIMETABLE_BENCH_MEASURE_SECS", 4_u64).clamp(1, 120);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measure))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
