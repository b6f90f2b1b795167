// Host-side tests for the start guard.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

mod startup {
    include!("../src/startup.rs");
}

use startup::claim_start;
use std::sync::atomic::AtomicBool;

#[test]
fn only_the_first_start_is_claimed() {
    let flag = AtomicBool::new(false);
    assert!(claim_start(&flag));
    assert!(!claim_start(&flag));
    assert!(!claim_start(&flag));
}

#[test]
fn flags_are_independent() {
    let a = AtomicBool::new(false);
    let b = AtomicBool::new(false);
    assert!(claim_start(&a));
    assert!(claim_start(&b));
}
