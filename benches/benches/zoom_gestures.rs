// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use tactile_gesture::{PanUpdate, PinchUpdate, Touch, TouchBatch, TouchPhase};
use tactile_zoom::{Gallery, ViewportGeometry, ZoomConfig, ZoomInput, ZoomSurface};

const FRAME_MS: u64 = 16;

fn surface() -> ZoomSurface {
    let geometry = ViewportGeometry::fit(Size::new(390.0, 844.0), Size::new(1_200.0, 800.0));
    ZoomSurface::new(ZoomConfig::default(), geometry)
}

/// Pinch in about a drifting focal point, then pan the zoomed image and fling it.
fn pinch_then_fling(frames: u64) -> Vec<ZoomInput> {
    let mut inputs = Vec::new();
    let mut time = 0;
    let focal = Point::new(195.0, 422.0);
    inputs.push(ZoomInput::TouchesDown(TouchBatch::new(
        TouchPhase::Down,
        [
            Touch::new(0, focal - Vec2::new(40.0, 0.0), time),
            Touch::new(1, focal + Vec2::new(40.0, 0.0), time),
        ],
        time,
    )));
    inputs.push(ZoomInput::PinchBegin(PinchUpdate::new(1.0, focal, 2, time)));
    for i in 0..frames {
        time += FRAME_MS;
        let t = i as f64 / frames as f64;
        let drift = Vec2::new(30.0 * t, -20.0 * t);
        inputs.push(ZoomInput::PinchUpdate(PinchUpdate::new(
            1.0 + 2.5 * t,
            focal + drift,
            2,
            time,
        )));
    }
    inputs.push(ZoomInput::PinchEnd(PinchUpdate::new(3.5, focal, 2, time)));

    time += 400;
    inputs.push(ZoomInput::TouchesDown(TouchBatch::single(
        TouchPhase::Down,
        focal,
        time,
    )));
    inputs.push(ZoomInput::PanBegin(PanUpdate::at(Vec2::ZERO, time)));
    for i in 0..frames {
        time += FRAME_MS;
        let dx = -6.0 * i as f64;
        inputs.push(ZoomInput::PanUpdate(
            PanUpdate::at(Vec2::new(dx, dx * 0.3), time).with_velocity(Vec2::new(-375.0, -110.0)),
        ));
    }
    inputs.push(ZoomInput::PanEnd(
        PanUpdate::at(Vec2::new(-6.0 * frames as f64, 0.0), time)
            .with_velocity(Vec2::new(-1_400.0, -300.0)),
    ));
    inputs
}

fn bench_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_surface");

    for frames in [30_u64, 120] {
        let stream = pinch_then_fling(frames);
        let end = stream.last().map_or(0, ZoomInput::time);
        group.bench_function(format!("pinch_pan_fling(frames={frames})"), |b| {
            b.iter_batched(
                surface,
                |mut surface| {
                    for input in stream.iter().cloned() {
                        let now = input.time();
                        surface.handle(input);
                        surface.tick(now);
                    }
                    let mut now = end;
                    while surface.is_animating() && now < end + 10_000 {
                        now += FRAME_MS;
                        surface.tick(now);
                    }
                    black_box(surface.transform());
                    black_box(surface.drain_events().count());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_gallery(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery");
    let stream = pinch_then_fling(60);

    for pages in [8_usize, 64] {
        group.bench_function(format!("route_and_recycle(pages={pages})"), |b| {
            b.iter_batched(
                || {
                    let mut gallery = Gallery::new(ZoomConfig::default(), pages, 0);
                    gallery.set_container(Size::new(390.0, 844.0));
                    for i in 0..pages {
                        gallery.set_content_size(i, Size::new(1_200.0, 800.0));
                    }
                    gallery
                },
                |mut gallery| {
                    for page in 0..pages {
                        for input in stream.iter().cloned() {
                            gallery.handle(input);
                        }
                        gallery.tick(stream.last().map_or(0, ZoomInput::time) + 2_000);
                        gallery.on_momentum_scroll_end(390.0 * (page + 1) as f64);
                    }
                    black_box(gallery.drain_events().count());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_surface, bench_gallery);
criterion_main!(benches);
