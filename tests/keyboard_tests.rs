// Host-side tests for keyboard-driven view selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod debug {
    include!("../src/debug.rs");
}

use debug::DebugView;

#[test]
fn digits_select_views() {
    assert_eq!(DebugView::for_digit("1"), Some(DebugView::Shaded));
    assert_eq!(DebugView::for_digit("2"), Some(DebugView::RippleOnly));
    assert_eq!(DebugView::for_digit("3"), Some(DebugView::Coordinates));
    assert_eq!(DebugView::for_digit("4"), Some(DebugView::AreaMask));
    assert_eq!(DebugView::for_digit("5"), None);
    assert_eq!(DebugView::for_digit("p"), None);
}

#[test]
fn shader_indices_are_distinct() {
    let mut seen: Vec<u32> = DebugView::ALL.iter().map(|v| v.shader_index()).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), DebugView::ALL.len());
    assert_eq!(DebugView::default().shader_index(), 0);
}

#[test]
fn every_view_is_reachable_from_a_digit() {
    for (i, view) in DebugView::ALL.iter().enumerate() {
        let key = (i + 1).to_string();
        assert_eq!(DebugView::for_digit(&key), Some(*view));
        assert!(!view.label().is_empty());
    }
}

#[test]
fn only_single_digits_in_range_select_a_view() {
    assert_eq!(DebugView::for_digit("0"), None);
    assert_eq!(DebugView::for_digit("12"), None);
    assert_eq!(DebugView::for_digit(""), None);
    assert_eq!(DebugView::for_digit("+1"), None);
}
