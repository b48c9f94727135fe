// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sensitivities_are_within_accepted_range() {
    for s in [TRANSFORM_SENSITIVITY, SCROLL_SENSITIVITY] {
        assert!(s >= SENSITIVITY_MIN && s <= SENSITIVITY_MAX);
    }
    assert!(SENSITIVITY_MIN > 0.0);
    // scroll mode pans slower than transform mode
    assert!(SCROLL_SENSITIVITY < TRANSFORM_SENSITIVITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hotspot_ring_is_percent() {
    assert_eq!(HOTSPOT_RING, 100.0);
}

#[test]
fn selectors_are_well_formed() {
    for class_selector in [CONTAINER_SELECTOR, HOTSPOT_SELECTOR, RESOURCE_BUTTON_SELECTOR] {
        assert!(class_selector.starts_with('.'), "{}", class_selector);
    }
    for id in [PANORAMA_ID, INFO_PANEL_ID, INFO_CONTENT_ID, CLOSE_BUTTON_ID] {
        assert!(!id.starts_with('#') && !id.is_empty(), "{}", id);
    }
    for attr in [
        TARGET_ATTR,
        RESOURCE_ATTR,
        PAN_MODE_ATTR,
        SENSITIVITY_ATTR,
        HOTSPOT_WRAP_ATTR,
        START_ATTR,
    ] {
        assert!(attr.starts_with("data-"), "{}", attr);
    }
}

#[test]
fn cursors_differ() {
    assert_ne!(CURSOR_GRAB, CURSOR_GRABBING);
}
