// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tactile_motion::{Decay, Easing, Motion, Spring, SpringConfig, Timeline, Timing};

const FRAME_MS: u64 = 16;

fn run_to_rest(motion: Motion) -> u64 {
    let mut timeline = Timeline::new();
    timeline.start(0_u8, motion, 0);
    let mut now = 0;
    while !timeline.is_empty() && now < 60_000 {
        now += FRAME_MS;
        black_box(timeline.advance(now, |_, v| {
            black_box(v);
        }));
    }
    now
}

fn bench_motions(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion_to_rest");

    group.bench_function("timing", |b| {
        b.iter(|| run_to_rest(Timing::new(0.0, 400.0, 300, Easing::InOutQuad).into()));
    });
    group.bench_function("decay", |b| {
        b.iter(|| {
            run_to_rest(
                Decay::new(0.0, -2_400.0)
                    .with_clamp(-1_500.0, 1_500.0)
                    .into(),
            )
        });
    });
    group.bench_function("spring", |b| {
        let config = SpringConfig::new(0.5, 12.0, 100.0);
        b.iter(|| run_to_rest(Spring::new(-600.0, -900.0, config).with_velocity(-800.0).into()));
    });

    group.finish();
}

criterion_group!(benches, bench_motions);
criterion_main!(benches);
