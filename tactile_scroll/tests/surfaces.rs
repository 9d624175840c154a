// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture scenarios for the scroll-surface engines.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use tactile_gesture::{PanUpdate, TouchBatch, TouchPhase};
use tactile_scroll::{
    DraggableSheet, OverscrollConfig, OverscrollEvent, OverscrollPull, SheetConfig, SheetEvent,
    SheetPhase, SwipeConfig, SwipeEvent, SwipeRegistry, SwipeRow,
};

fn swipe(row: &mut SwipeRow, dx: f64, vx: f64) {
    row.pan_begin(0);
    row.pan_update(&PanUpdate::at(Vec2::new(dx, 0.0), 16));
    row.pan_end(&PanUpdate::at(Vec2::new(dx, 0.0), 32).with_velocity(Vec2::new(vx, 0.0)));
    row.tick(3_000);
}

#[test]
fn short_slow_swipe_closes() {
    let mut row = SwipeRow::new(SwipeConfig::new(160.0));
    swipe(&mut row, -60.0, -100.0);
    assert!(!row.is_open());
    assert_eq!(row.offset(), 0.0);
    assert_eq!(row.drain_events().collect::<Vec<_>>(), [SwipeEvent::Closed]);
}

#[test]
fn fast_swipe_opens() {
    let mut row = SwipeRow::new(SwipeConfig::new(160.0));
    swipe(&mut row, -30.0, -400.0);
    assert!(row.is_open());
    assert_eq!(row.offset(), -160.0);
}

#[test]
fn open_row_swiped_right_closes() {
    let mut row = SwipeRow::new(SwipeConfig::new(160.0));
    row.open();
    row.tick(2_000);
    row.pan_begin(2_100);
    row.pan_update(&PanUpdate::at(Vec2::new(100.0, 0.0), 2_116));
    assert_eq!(row.offset(), -60.0);
    row.pan_end(&PanUpdate::at(Vec2::new(100.0, 0.0), 2_132));
    row.tick(5_000);
    assert!(!row.is_open());
    assert_eq!(row.offset(), 0.0);
}

#[test]
fn activating_a_row_closes_the_others() {
    let rows: Vec<_> = (0..3)
        .map(|_| Rc::new(RefCell::new(SwipeRow::new(SwipeConfig::new(100.0)))))
        .collect();
    let mut registry = SwipeRegistry::new();
    let ids: Vec<_> = rows.iter().map(|row| registry.register(row)).collect();

    rows[0].borrow_mut().open();
    rows[1].borrow_mut().open();
    registry.tick(1_000);

    {
        let mut row = rows[2].borrow_mut();
        row.touches_down(&TouchBatch::single(TouchPhase::Down, Point::new(300.0, 10.0), 1_100));
        assert!(!row.touches_move(&TouchBatch::single(TouchPhase::Move, Point::new(297.0, 30.0), 1_108)));
        assert!(row.touches_move(&TouchBatch::single(TouchPhase::Move, Point::new(290.0, 40.0), 1_116)));
    }
    registry.tick(1_116);
    assert!(!rows[0].borrow().is_open());
    assert!(!rows[1].borrow().is_open());

    registry.tick(4_000);
    assert_eq!(rows[0].borrow().offset(), 0.0);
    assert_eq!(registry.close_others(ids[2]), 0);
}

#[test]
fn sheet_pull_below_threshold_returns() {
    let mut sheet = DraggableSheet::new(SheetConfig::new(400.0));
    sheet.show(0);
    sheet.tick(1_000);

    sheet.pan_update(&PanUpdate::at(Vec2::new(0.0, 150.0), 1_016));
    assert_eq!(sheet.phase(), SheetPhase::Dragging);
    sheet.pan_end(&PanUpdate::at(Vec2::new(0.0, 150.0), 1_032).with_velocity(Vec2::new(0.0, 200.0)));
    assert_eq!(sheet.phase(), SheetPhase::Returning);
    sheet.tick(1_200);
    assert_eq!(sheet.offset(), 0.0);
    assert_eq!(sheet.phase(), SheetPhase::Idle);
    assert_eq!(sheet.drain_events().count(), 0);
}

#[test]
fn sheet_fling_at_top_collapses() {
    let mut sheet = DraggableSheet::new(SheetConfig::new(400.0));
    sheet.show(0);
    sheet.tick(1_000);

    sheet.pan_update(&PanUpdate::at(Vec2::new(0.0, 60.0), 1_016));
    sheet.pan_end(&PanUpdate::at(Vec2::new(0.0, 60.0), 1_032).with_velocity(Vec2::new(0.0, 900.0)));
    sheet.tick(1_100);
    assert_eq!(sheet.phase(), SheetPhase::Collapsing);
    sheet.tick(1_200);
    assert_eq!(sheet.offset(), 400.0);
    assert_eq!(sheet.phase(), SheetPhase::Closed);
    assert_eq!(sheet.drain_events().collect::<Vec<_>>(), [SheetEvent::Closed]);
}

#[test]
fn sheet_drag_is_offset_by_list_scroll() {
    let mut sheet = DraggableSheet::new(SheetConfig::new(400.0));
    sheet.show(0);
    sheet.tick(1_000);

    sheet.set_scroll_offset(120.0);
    sheet.pan_update(&PanUpdate::at(Vec2::new(0.0, 100.0), 1_016));
    assert_eq!(sheet.offset(), 0.0);
    sheet.pan_update(&PanUpdate::at(Vec2::new(0.0, 300.0), 1_032));
    assert_eq!(sheet.offset(), 180.0);

    // Pulled 180 < 200 and the list is not at the top: a fast release returns.
    sheet.pan_end(&PanUpdate::at(Vec2::new(0.0, 300.0), 1_048).with_velocity(Vec2::new(0.0, 900.0)));
    assert_eq!(sheet.phase(), SheetPhase::Returning);
}

#[test]
fn closed_sheet_can_be_shown_again() {
    let mut sheet = DraggableSheet::new(SheetConfig::new(400.0));
    sheet.show(0);
    sheet.tick(1_000);
    sheet.close(1_000);
    sheet.tick(1_500);
    assert_eq!(sheet.phase(), SheetPhase::Closed);

    sheet.show(2_000);
    assert_eq!(sheet.offset(), 400.0);
    sheet.tick(3_000);
    assert_eq!(sheet.offset(), 0.0);
    assert_eq!(sheet.phase(), SheetPhase::Idle);
}

#[test]
fn pull_released_by_momentum_end() {
    let mut pull = OverscrollPull::new(OverscrollConfig::new(800.0));
    pull.pan_update(&PanUpdate::at(Vec2::new(0.0, 400.0), 16));
    assert_eq!(pull.pull_distance(), 144.0);
    assert!(!pull.is_scroll_enabled());

    pull.on_momentum_scroll_end(40);
    pull.tick(200);
    assert!(!pull.is_scroll_enabled(), "scroll stays off until the pull settles");
    pull.tick(5_000);
    assert!(pull.is_scroll_enabled());
    assert_eq!(pull.drag_offset(), 0.0);
    assert_eq!(
        pull.drain_events().collect::<Vec<_>>(),
        [OverscrollEvent::ScrollEnable(false), OverscrollEvent::ScrollEnable(true)]
    );
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(SwipeRow::try_new(SwipeConfig::new(-1.0)).is_err());
    assert!(DraggableSheet::try_new(SheetConfig {
        collapse_ratio: 1.5,
        ..SheetConfig::new(400.0)
    })
    .is_err());
    assert!(OverscrollPull::try_new(OverscrollConfig {
        pull_ratio: 0.5,
        ..OverscrollConfig::new(800.0)
    })
    .is_err());
    assert!(OverscrollPull::try_new(OverscrollConfig::new(800.0)).is_ok());
}
