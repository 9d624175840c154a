// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use tactile_gesture::{PanUpdate, TouchBatch, TouchPhase};
use tactile_pager::{PageSwiper, PagerConfig};
use tactile_scroll::{SwipeConfig, SwipeRegistry, SwipeRow};

const FRAME_MS: u64 = 16;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn bench_pager(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_swiper");

    for swipes in [16_usize, 256] {
        group.bench_function(format!("random_swipes(n={swipes})"), |b| {
            b.iter_batched(
                || (PageSwiper::new(PagerConfig::new(390.0, 50).with_initial_index(25)), Lcg(7)),
                |(mut pager, mut rng)| {
                    let mut time = 0;
                    for _ in 0..swipes {
                        let dx = (rng.next_f64() - 0.5) * 500.0;
                        let vx = (rng.next_f64() - 0.5) * 2_000.0;
                        pager.pan_begin(time);
                        for step in 1..=10 {
                            time += FRAME_MS;
                            pager.pan_update(&PanUpdate::at(Vec2::new(dx * step as f64 / 10.0, 0.0), time));
                        }
                        pager.pan_end(
                            &PanUpdate::at(Vec2::new(dx, 0.0), time).with_velocity(Vec2::new(vx, 0.0)),
                            true,
                        );
                        for _ in 0..12 {
                            time += FRAME_MS;
                            pager.tick(time);
                        }
                    }
                    black_box(pager.drain_events().count());
                    black_box(pager.translation());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_swipe_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_registry");

    for rows in [32_usize, 512] {
        group.bench_function(format!("activate_each(rows={rows})"), |b| {
            b.iter_batched(
                || {
                    let rows: Vec<_> = (0..rows)
                        .map(|_| Rc::new(RefCell::new(SwipeRow::new(SwipeConfig::new(160.0)))))
                        .collect();
                    let mut registry = SwipeRegistry::new();
                    for row in &rows {
                        registry.register(row);
                    }
                    (rows, registry)
                },
                |(rows, mut registry)| {
                    let mut time = 0;
                    for row in &rows {
                        {
                            let mut row = row.borrow_mut();
                            let start = Point::new(300.0, 20.0);
                            row.touches_down(&TouchBatch::single(TouchPhase::Down, start, time));
                            time += FRAME_MS;
                            row.touches_move(&TouchBatch::single(
                                TouchPhase::Move,
                                start - Vec2::new(12.0, 0.0),
                                time,
                            ));
                            row.pan_begin(time);
                            row.pan_update(&PanUpdate::at(Vec2::new(-120.0, 0.0), time));
                            row.pan_end(&PanUpdate::at(Vec2::new(-120.0, 0.0), time));
                            row.touches_up();
                        }
                        registry.tick(time);
                    }
                    black_box(registry.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pager, bench_swipe_rows);
criterion_main!(benches);
