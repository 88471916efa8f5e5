#![cfg(feature = "wrapper")]
//! Unit tests for the call-at-most-once wrapper.
//!
//! Tests cover:
//! - single invocation and result caching
//! - per-instance state isolation
//! - poisoned state handling

use lowbar::wrapper::Once;
use rstest::rstest;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};

// =============================================================================
// Invocation and Caching
// =============================================================================

#[rstest]
fn once_defers_invocation_until_first_call() {
    let ran = Cell::new(false);
    let wrapper = Once::new(|n: i32| {
        ran.set(true);
        n
    });

    assert!(!ran.get());
    assert!(!wrapper.has_run());

    let _ = wrapper.call(1);
    assert!(ran.get());
    assert!(wrapper.has_run());
}

#[rstest]
fn once_invokes_the_function_exactly_once() {
    let runs = Cell::new(0);
    let wrapper = Once::new(|n: i32| {
        runs.set(runs.get() + 1);
        n * 2
    });

    assert_eq!(*wrapper.call(1), 2);
    assert_eq!(*wrapper.call(10), 2);
    assert_eq!(*wrapper.call(100), 2);
    assert_eq!(runs.get(), 1);
}

#[rstest]
fn once_returns_the_first_result_for_any_later_argument() {
    let wrapper = Once::new(|greeting: &str| greeting.to_uppercase());
    assert_eq!(*wrapper.call("hi"), "HI");
    assert_eq!(*wrapper.call("bye"), "HI");
    assert_eq!(*wrapper.call("never"), "HI");
}

#[rstest]
fn independent_wrappers_never_interfere() {
    let first = Once::new(|n: i32| n);
    let second = Once::new(|n: i32| n);

    assert_eq!(*first.call(1), 1);
    assert_eq!(*second.call(2), 2);
    assert_eq!(*first.call(3), 1);
    assert_eq!(*second.call(4), 2);
}

// =============================================================================
// into_result
// =============================================================================

#[rstest]
fn into_result_before_any_call_is_none() {
    let wrapper = Once::new(|n: i32| n);
    assert_eq!(wrapper.into_result(), None);
}

#[rstest]
fn into_result_after_a_call_returns_the_cached_value() {
    let wrapper = Once::new(|n: i32| n + 1);
    let _ = wrapper.call(41);
    assert_eq!(wrapper.into_result(), Some(42));
}

// =============================================================================
// Poisoned State
// =============================================================================

#[rstest]
fn once_poisoned_after_a_panic() {
    let wrapper = Once::new(|_: i32| -> i32 { panic!("wrapped function failed") });

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = wrapper.call(1);
    }));
    assert!(result.is_err());
    assert!(wrapper.is_poisoned());
}

#[rstest]
#[should_panic(expected = "Once instance has been poisoned")]
fn once_call_on_poisoned_panics() {
    let wrapper = Once::new(|_: i32| -> i32 { panic!("wrapped function failed") });

    let _ = catch_unwind(AssertUnwindSafe(|| {
        let _ = wrapper.call(1);
    }));

    let _ = wrapper.call(2);
}
