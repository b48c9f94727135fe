// Host-side tests for the drag-to-pan state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod pan {
        include!("../src/core/pan.rs");
    }
}

use crate::core::constants::{CURSOR_GRAB, CURSOR_GRABBING};
use crate::core::pan::*;
use crate::core::params::StartPosition;

fn wide_panner() -> Panner {
    // 1200px of travel at 3x
    Panner::new(Surface::new(2000.0, 800.0), 3.0)
}

#[test]
fn offset_stays_within_bounds_for_any_pointer() {
    let mut p = wide_panner();
    p.begin_drag(400.0);
    for x in (-5000..5000).step_by(137) {
        let offset = p.continue_drag(x as f64).unwrap();
        assert!(
            (0.0..=1200.0).contains(&offset),
            "offset {} out of range for pointer {}",
            offset,
            x
        );
    }
}

#[test]
fn clamps_at_both_ends() {
    let mut p = wide_panner();
    p.begin_drag(400.0);
    // dragging right pulls the offset below zero
    assert_eq!(p.continue_drag(10_000.0), Some(0.0));
    // dragging left pushes it past the end
    assert_eq!(p.continue_drag(-10_000.0), Some(1200.0));
    assert_eq!(p.offset(), 1200.0);
}

#[test]
fn delta_is_scaled_by_sensitivity() {
    let mut p = wide_panner();
    p.begin_drag(100.0);
    assert_eq!(p.continue_drag(90.0), Some(30.0));
    assert_eq!(p.continue_drag(50.0), Some(150.0));

    let mut slow = Panner::new(Surface::new(2000.0, 800.0), 2.0);
    slow.begin_drag(100.0);
    assert_eq!(slow.continue_drag(50.0), Some(100.0));
}

#[test]
fn second_drag_starts_from_previous_offset() {
    let mut p = wide_panner();
    p.begin_drag(100.0);
    p.continue_drag(50.0);
    p.end_drag(DragEnd::Release);

    p.begin_drag(500.0);
    assert_eq!(p.continue_drag(490.0), Some(180.0));
}

#[test]
fn move_without_session_is_ignored() {
    let mut p = wide_panner();
    assert_eq!(p.continue_drag(123.0), None);
    assert_eq!(p.offset(), 0.0);

    p.begin_drag(100.0);
    p.continue_drag(50.0);
    p.end_drag(DragEnd::Release);
    assert_eq!(p.continue_drag(0.0), None);
    assert_eq!(p.offset(), 150.0);
}

#[test]
fn leaving_the_container_matches_release() {
    let mut released = wide_panner();
    let mut left = wide_panner();
    for p in [&mut released, &mut left] {
        p.begin_drag(300.0);
        p.continue_drag(250.0);
        p.continue_drag(220.0);
    }
    assert!(released.end_drag(DragEnd::Release).is_some());
    assert!(left.end_drag(DragEnd::Leave).is_some());

    assert_eq!(released, left);
    assert!(!left.is_dragging());
    assert_eq!(left.cursor(), CURSOR_GRAB);
}

#[test]
fn cursor_follows_session() {
    let mut p = wide_panner();
    assert_eq!(p.cursor(), CURSOR_GRAB);
    p.begin_drag(0.0);
    assert_eq!(p.cursor(), CURSOR_GRABBING);
    p.end_drag(DragEnd::Cancel);
    assert_eq!(p.cursor(), CURSOR_GRAB);
}

#[test]
fn starting_over_an_active_session_resets_it() {
    let mut p = wide_panner();
    assert!(!p.begin_drag(100.0));
    p.continue_drag(50.0);

    assert!(p.begin_drag(300.0));
    let s = p.session().unwrap();
    assert_eq!(s.origin_x, 300.0);
    assert_eq!(s.start_offset, 150.0);
    assert_eq!(p.continue_drag(300.0), Some(150.0));
}

#[test]
fn ending_twice_is_harmless() {
    let mut p = wide_panner();
    p.begin_drag(10.0);
    assert!(p.end_drag(DragEnd::Release).is_some());
    assert!(p.end_drag(DragEnd::Leave).is_none());
    assert!(!p.is_dragging());
}

#[test]
fn surface_narrower_than_viewport_never_pans() {
    let s = Surface::new(500.0, 800.0);
    assert_eq!(s.max_offset(), 0.0);
    assert_eq!(s.scroll_percentage(0.0), 0.0);

    let mut p = Panner::new(s, 3.0);
    p.begin_drag(0.0);
    assert_eq!(p.continue_drag(-1000.0), Some(0.0));
    assert_eq!(p.scroll_percentage(), 0.0);
}

#[test]
fn surface_ignores_bad_measurements() {
    let s = Surface::new(f64::NAN, -20.0);
    assert_eq!(s.total_width, 0.0);
    assert_eq!(s.viewport_width, 0.0);
    assert_eq!(s.clamp(f64::NAN), 0.0);
}

#[test]
fn scroll_percentage_tracks_offset() {
    let s = Surface::new(2000.0, 800.0);
    assert_eq!(s.scroll_percentage(0.0), 0.0);
    assert_eq!(s.scroll_percentage(300.0), 25.0);
    assert_eq!(s.scroll_percentage(1200.0), 100.0);
    assert_eq!(s.scroll_percentage(5000.0), 100.0);
}

#[test]
fn resize_reclamps_offset() {
    let mut p = wide_panner();
    p.begin_drag(0.0);
    p.continue_drag(-1000.0);
    p.end_drag(DragEnd::Release);
    assert_eq!(p.offset(), 1200.0);

    assert_eq!(p.set_surface(Surface::new(1000.0, 800.0)), 200.0);
    assert_eq!(p.set_surface(Surface::new(3000.0, 800.0)), 200.0);
}

#[test]
fn drag_starts_from_externally_scrolled_offset() {
    // scroll mode, 2x: the container was swiped to 600 without a drag
    let mut p = Panner::new(Surface::new(2000.0, 800.0), 2.0);
    assert_eq!(p.sync_offset(600.0), 600.0);

    p.begin_drag(400.0);
    assert_eq!(p.session().unwrap().start_offset, 600.0);
    assert_eq!(p.continue_drag(399.0), Some(602.0));
}

#[test]
fn sync_offset_clamps_and_yields_to_active_drag() {
    let mut p = wide_panner();
    assert_eq!(p.sync_offset(5000.0), 1200.0);
    assert_eq!(p.sync_offset(-3.0), 0.0);

    p.begin_drag(100.0);
    p.continue_drag(90.0);
    assert_eq!(p.sync_offset(700.0), 30.0);
    assert_eq!(p.continue_drag(80.0), Some(60.0));
}

#[test]
fn start_positions() {
    let mut p = wide_panner();
    assert_eq!(p.jump_to(StartPosition::Center), 600.0);
    assert_eq!(p.jump_to(StartPosition::Start), 0.0);
}

#[test]
fn mouse_and_touch_share_coordinates() {
    let mouse = PointerInput::Mouse { page_x: 340.0 };
    let touch = PointerInput::Touch { page_x: 340.0 };
    assert_eq!(mouse.container_x(40.0), 300.0);
    assert_eq!(touch.container_x(40.0), mouse.container_x(40.0));
}
