// Host-side tests for per-frame coalescing of pan updates.
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
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use crate::core::pan::{DragEnd, Panner, Surface};
use crate::core::schedule::FrameSlot;

#[test]
fn empty_slot_has_nothing_to_run() {
    let mut slot: FrameSlot<f64> = FrameSlot::new();
    assert!(!slot.is_pending());
    assert_eq!(slot.take(), None);
    assert_eq!(slot.superseded(), 0);
}

#[test]
fn newer_update_replaces_pending_one() {
    let mut slot = FrameSlot::new();
    assert_eq!(slot.schedule(1.0), None);
    assert_eq!(slot.schedule(2.0), Some(1.0));
    assert_eq!(slot.take(), Some(2.0));
    assert_eq!(slot.take(), None);
    assert_eq!(slot.superseded(), 1);
}

#[test]
fn rapid_moves_apply_only_last_offset() {
    let mut panner = Panner::new(Surface::new(3000.0, 1000.0), 3.0);
    let mut slot = FrameSlot::new();
    let mut applied = Vec::new();

    panner.begin_drag(500.0);
    // five moves arrive before the display refreshes
    for x in [495.0, 490.0, 480.0, 470.0, 460.0] {
        let offset = panner.continue_drag(x).unwrap();
        slot.schedule(offset);
    }
    // refresh
    if let Some(offset) = slot.take() {
        applied.push(offset);
    }
    panner.end_drag(DragEnd::Release);

    assert_eq!(applied, vec![120.0]);
    assert_eq!(applied[0], panner.offset());
    assert_eq!(slot.superseded(), 4);
}

#[test]
fn each_refresh_applies_at_most_one_update() {
    let mut slot = FrameSlot::new();
    let mut applied = Vec::new();
    for frame in 0..3 {
        for i in 0..4 {
            slot.schedule(frame * 10 + i);
        }
        applied.extend(slot.take());
        // an idle refresh renders nothing
        applied.extend(slot.take());
    }
    assert_eq!(applied, vec![3, 13, 23]);
}

#[test]
fn cancel_discards_pending_update() {
    let mut slot = FrameSlot::new();
    slot.schedule("late");
    assert_eq!(slot.cancel(), Some("late"));
    assert!(!slot.is_pending());
    assert_eq!(slot.take(), None);
}
