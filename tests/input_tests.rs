// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn viewport_gate_uses_breakpoint_inclusively() {
    assert!(viewport_qualifies(1280.0, 768.0));
    assert!(viewport_qualifies(768.0, 768.0));
    assert!(!viewport_qualifies(767.0, 768.0));
}

#[test]
fn unlaid_out_viewport_does_not_qualify() {
    assert!(!viewport_qualifies(0.0, 768.0));
    assert!(!viewport_qualifies(f64::NAN, 768.0));
}
