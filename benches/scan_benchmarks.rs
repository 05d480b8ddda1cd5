//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite verifies that scan processing meets its targets:
//! - Single kind resolution: < 1μs mean
//! - Single session hours calculation: < 10μs mean
//! - Full in/out day through the processor: < 100μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDateTime;

use attendance_engine::calculation::calculate_session_hours;
use attendance_engine::clock::FixedClock;
use attendance_engine::config::EngineConfig;
use attendance_engine::models::SessionFamily;
use attendance_engine::processor::AttendanceProcessor;
use attendance_engine::resolver::resolve_clock_kind;
use attendance_engine::store::MemoryStore;

fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
        .unwrap()
}

fn bench_resolution(c: &mut Criterion) {
    let config = EngineConfig::default();
    let now = make_datetime("2026-01-15", "09:00:00");

    c.bench_function("resolve_fresh_day", |b| {
        b.iter(|| resolve_clock_kind(black_box(None), black_box(now), None, &config.boundaries))
    });
}

fn bench_session_hours(c: &mut Criterion) {
    let config = EngineConfig::default();
    let clock_in = make_datetime("2026-01-15", "08:00:00");
    let clock_out = make_datetime("2026-01-15", "19:30:00");

    c.bench_function("session_hours_full_day_with_spill", |b| {
        b.iter(|| {
            calculate_session_hours(
                black_box(clock_in),
                black_box(clock_out),
                SessionFamily::Morning,
                &config,
            )
        })
    });
}

fn bench_full_day_through_processor(c: &mut Criterion) {
    c.bench_function("processor_full_day", |b| {
        b.iter(|| {
            let clock = FixedClock::new(make_datetime("2026-01-15", "08:00:00"));
            let mut processor =
                AttendanceProcessor::new(MemoryStore::new(), &clock, EngineConfig::default())
                    .unwrap();

            processor.process_scan("emp_001").unwrap();
            clock.set(make_datetime("2026-01-15", "12:00:00"));
            processor.process_scan("emp_001").unwrap();
            clock.set(make_datetime("2026-01-15", "13:00:00"));
            processor.process_scan("emp_001").unwrap();
            clock.set(make_datetime("2026-01-15", "17:00:00"));
            black_box(processor.process_scan("emp_001").unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_resolution,
    bench_session_hours,
    bench_full_day_through_processor
);
criterion_main!(benches);
