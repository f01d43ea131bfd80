// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel playback.
//!
//! Measures the performance of:
//! - Animation ticks across a long carousel
//! - Scroll offset resolution
//! - A full auto-play traversal

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_stories::media::Asset;
use iced_stories::ui::carousel::{Message, Settings, SlideOffsets, State};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn unsupported_assets(count: usize) -> Vec<Asset> {
    (0..count)
        .map(|i| Asset::new(format!("slide-{i}"), "video"))
        .collect()
}

/// Benchmark one animation frame for carousels of increasing length.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_playback");

    for count in [3usize, 50, 500] {
        group.bench_with_input(BenchmarkId::new("tick", count), &count, |b, &count| {
            let t0 = Instant::now();
            let (mut carousel, _) = State::new_at(unsupported_assets(count), Settings::default(), t0);
            let frame = t0 + Duration::from_millis(16);
            b.iter(|| {
                let _ = black_box(carousel.update_at(Message::Tick(frame), frame));
            });
        });
    }

    group.finish();
}

/// Benchmark mapping scroll offsets back to slide indices.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_playback");
    let offsets = SlideOffsets::new(500, 412.5);

    group.bench_function("resolve_offsets", |b| {
        b.iter(|| {
            for step in 0..1_000 {
                black_box(offsets.resolve(black_box(step as f32 * 206.25)));
            }
        });
    });

    group.finish();
}

/// Benchmark a complete traversal driven by 16 ms frames.
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_playback");

    group.bench_function("full_traversal_10_slides", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let (mut carousel, _) = State::new_at(unsupported_assets(10), Settings::default(), t0);
            let mut now = t0;
            let end = t0 + Duration::from_secs(51);
            while now < end {
                now += Duration::from_millis(16);
                let _ = carousel.update_at(Message::Tick(now), now);
            }
            black_box(carousel.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_resolve, bench_traversal);
criterion_main!(benches);
