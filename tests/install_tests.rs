// Host-side tests for the install-once latch.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod install {
    include!("../src/install.rs");
}

use install::InstallOnce;
use std::cell::Cell;

#[test]
fn failed_install_leaves_latch_open_for_retry() {
    let latch = InstallOnce::new();
    let calls = Cell::new(0);

    let first: Result<bool, &str> = latch.run(|| {
        calls.set(calls.get() + 1);
        Err("no body")
    });
    assert_eq!(first, Err("no body"));
    assert!(!latch.is_done());

    let retry: Result<bool, &str> = latch.run(|| {
        calls.set(calls.get() + 1);
        Ok(())
    });
    assert_eq!(retry, Ok(true));
    assert!(latch.is_done());
    assert_eq!(calls.get(), 2);
}

#[test]
fn successful_install_runs_only_once() {
    static LATCH: InstallOnce = InstallOnce::new();
    let calls = Cell::new(0);
    let install = || -> Result<(), ()> {
        calls.set(calls.get() + 1);
        Ok(())
    };

    assert_eq!(LATCH.run(install), Ok(true));
    assert_eq!(LATCH.run(install), Ok(false));
    assert_eq!(calls.get(), 1);
}
