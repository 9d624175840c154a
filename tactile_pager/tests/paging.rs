// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-release scenarios for the page swiper.

use kurbo::{Point, Vec2};
use tactile_gesture::{PanUpdate, TouchBatch, TouchPhase};
use tactile_pager::{PageSwiper, PagerConfig, PagerEvent, Side};

fn pager() -> PageSwiper {
    PageSwiper::new(PagerConfig::new(300.0, 5).with_initial_index(2))
}

fn drag(pager: &mut PageSwiper, dx: f64, vx: f64) -> Vec<PagerEvent> {
    pager.pan_begin(0);
    pager.pan_update(&PanUpdate::at(Vec2::new(dx, 0.0), 16));
    let release = PanUpdate::at(Vec2::new(dx, 0.0), 32).with_velocity(Vec2::new(vx, 0.0));
    pager.pan_end(&release, true);
    pager.tick(3_000);
    pager.drain_events().collect()
}

#[test]
fn starts_on_initial_page() {
    let p = pager();
    assert_eq!(p.translation(), -600.0);
    assert_eq!(p.current_page(), 2);
    assert_eq!(p.progress(), 2.0);
}

#[test]
fn slow_short_drag_snaps_back() {
    let mut p = pager();
    let events = drag(&mut p, -50.0, -400.0);
    assert_eq!(p.translation(), -600.0);
    assert_eq!(p.saved_translation(), -600.0);
    assert_eq!(events, [PagerEvent::MoveEnd]);
}

#[test]
fn drag_past_half_a_page_advances() {
    let mut p = pager();
    let events = drag(&mut p, -200.0, 0.0);
    assert_eq!(p.translation(), -900.0);
    assert_eq!(p.current_page(), 3);
    assert_eq!(
        events,
        [
            PagerEvent::MoveEnd,
            PagerEvent::PageWillChange { from: 2, to: 3 },
            PagerEvent::PageChanged(3),
        ]
    );
}

#[test]
fn fling_advances_without_crossing() {
    let mut p = pager();
    drag(&mut p, 40.0, 900.0);
    assert_eq!(p.translation(), -300.0);
    assert_eq!(p.current_page(), 1);
}

#[test]
fn fling_against_the_drag_snaps_back() {
    let mut p = pager();
    let events = drag(&mut p, 200.0, -900.0);
    assert_eq!(p.translation(), -600.0);
    assert!(
        !events.iter().any(|e| matches!(e, PagerEvent::PageChanged(_))),
        "page must not change: {events:?}"
    );
}

#[test]
fn drag_is_clamped_at_the_edges() {
    let mut p = PageSwiper::new(PagerConfig::new(300.0, 3));
    p.pan_begin(0);
    p.pan_update(&PanUpdate::at(Vec2::new(80.0, 0.0), 16));
    assert_eq!(p.translation(), 0.0);

    p.pan_update(&PanUpdate::at(Vec2::new(-900.0, 0.0), 32));
    assert_eq!(p.translation(), -600.0);

    let events: Vec<_> = p.drain_events().collect();
    assert_eq!(
        events,
        [
            PagerEvent::MoveOverflow {
                side: Side::Left,
                translation: 80.0,
            },
            PagerEvent::MoveOverflow {
                side: Side::Right,
                translation: -900.0,
            },
        ]
    );
}

#[test]
fn last_page_does_not_advance() {
    let mut p = PageSwiper::new(PagerConfig::new(300.0, 3).with_initial_index(2));
    drag(&mut p, -250.0, -2_000.0);
    assert_eq!(p.translation(), -600.0);
    assert_eq!(p.current_page(), 2);
}

#[test]
fn gate_claims_horizontal_drags_only() {
    let mut p = pager();
    p.touches_down(&TouchBatch::single(TouchPhase::Down, Point::new(100.0, 100.0), 0));
    assert!(!p.touches_move(&TouchBatch::single(TouchPhase::Move, Point::new(101.0, 100.0), 8)));
    assert!(p.touches_move(&TouchBatch::single(TouchPhase::Move, Point::new(103.0, 101.0), 16)));
    assert!(p.is_pan_granted());
    p.touches_up();
    assert!(!p.is_pan_granted());

    p.touches_down(&TouchBatch::single(TouchPhase::Down, Point::new(100.0, 100.0), 100));
    assert!(!p.touches_move(&TouchBatch::single(TouchPhase::Move, Point::new(110.0, 110.0), 116)));
    p.touches_cancel();
}

#[test]
fn unrecognized_release_aligns_to_nearest_page() {
    let mut p = pager();
    p.on_layout(320.0);
    p.pan_begin(0);
    p.pan_end(&PanUpdate::at(Vec2::ZERO, 10), false);
    p.tick(3_000);
    assert_eq!(p.translation(), -640.0);
    let events: Vec<_> = p.drain_events().collect();
    assert!(events.is_empty(), "no MoveEnd for a tap: {events:?}");
}

#[test]
fn interrupted_settle_resumes_from_frozen_position() {
    let mut p = pager();
    p.pan_begin(0);
    p.pan_update(&PanUpdate::at(Vec2::new(-200.0, 0.0), 16));
    p.pan_end(&PanUpdate::at(Vec2::new(-200.0, 0.0), 32), true);
    p.tick(100);
    let frozen = p.translation();
    assert!(frozen < -600.0 && frozen > -900.0, "mid-flight: {frozen}");

    p.pan_begin(120);
    assert!(!p.is_animating());
    assert_eq!(p.saved_translation(), frozen);
    assert_eq!(p.target_page(), 3);
}

#[test]
fn layout_keeps_the_current_page() {
    let mut p = pager();
    p.on_layout(300.5);
    assert_eq!(p.translation(), -600.0);
    p.on_layout(400.0);
    assert_eq!(p.translation(), -800.0);
    assert_eq!(p.saved_translation(), -800.0);
    assert_eq!(p.config().fling_velocity(), 800.0);
}

#[test]
fn shrinking_page_count_pulls_back_the_target() {
    let mut p = PageSwiper::new(PagerConfig::new(300.0, 5).with_initial_index(4));
    p.set_page_count(3);
    p.tick(3_000);
    assert_eq!(p.translation(), -600.0);
    let events: Vec<_> = p.drain_events().collect();
    assert_eq!(events, [PagerEvent::PageChanged(2)]);
}

#[test]
fn invalid_config_is_rejected() {
    assert!(PageSwiper::try_new(PagerConfig::new(-1.0, 2)).is_err());
    assert!(PageSwiper::try_new(PagerConfig::new(300.0, 2)).is_ok());
}
