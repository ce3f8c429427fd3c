// Host-side tests for front-end tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn controls_are_positive() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert!(ORBIT_RADIANS_PER_PX > 0.0);
    assert!(ZOOM_PER_WHEEL_PX > 0.0);
    assert!(DRAG_THRESHOLD_PX > 0.0);
}

#[test]
fn light_direction_is_usable() {
    assert!(LIGHT_DIR.length() > 0.0);
    assert!(LIGHT_DIR.y > 0.0);
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(CANVAS_ID, HINT_ID);
    assert!(!MODEL_QUERY_KEY.is_empty());
}
