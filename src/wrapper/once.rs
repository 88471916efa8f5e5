//! Call-at-most-once function wrapping.
//!
//! This module provides the `Once<A, R, F>` type. The wrapped function
//! runs on the first call and its result is cached; every later call
//! returns the cached result without re-invoking the function, whatever
//! argument it is given.
//!
//! # Examples
//!
//! ```rust
//! use lowbar::wrapper::Once;
//! use std::cell::Cell;
//!
//! let runs = Cell::new(0);
//! let wrapper = Once::new(|n: i32| {
//!     runs.set(runs.get() + 1);
//!     n * 2
//! });
//!
//! assert_eq!(*wrapper.call(21), 42);
//! assert_eq!(*wrapper.call(100), 42); // cached, argument ignored
//! assert_eq!(runs.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`] wrapper.
///
/// Tracks whether the wrapped function is still waiting to run, has run
/// and cached its result, or panicked while running.
#[derive(Debug)]
pub enum OnceState<R, F> {
    /// The wrapped function has not run yet.
    Ready(F),
    /// The wrapped function ran; contains the cached result.
    Done(R),
    /// The wrapped function panicked. The wrapper is now unusable.
    Poisoned,
}

/// A wrapper that invokes its function at most once.
///
/// The first [`call`](Once::call) consumes the wrapped [`FnOnce`] and
/// caches its result; subsequent calls return the cached result without
/// running the function again, regardless of their arguments. Each
/// `Once::new` produces an independent instance with its own private
/// state.
///
/// # Type Parameters
///
/// * `A` - The argument type of the wrapped function
/// * `R` - The result type
/// * `F` - The wrapped function (defaults to `fn(A) -> R`)
///
/// # Thread Safety
///
/// This type is NOT thread-safe, matching the library's single-threaded
/// contract. The wrapper is also not reentrant: a wrapped function that
/// calls back into the same wrapper panics on the nested borrow.
///
/// # Examples
///
/// ```rust
/// use lowbar::wrapper::Once;
///
/// let wrapper = Once::new(|base: u32| base + 1);
/// assert!(!wrapper.has_run());
///
/// let result = wrapper.call(41);
/// assert_eq!(*result, 42);
/// ```
pub struct Once<A, R, F = fn(A) -> R> {
    state: RefCell<OnceState<R, F>>,
    _signature: PhantomData<fn(A) -> R>,
}

impl<A, R, F: FnOnce(A) -> R> Once<A, R, F> {
    /// Creates a wrapper around `function`.
    ///
    /// The function will not be called until [`call`](Once::call) is
    /// invoked.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Ready(function)),
            _signature: PhantomData,
        }
    }

    /// Invokes the wrapped function, or returns the cached result of the
    /// first invocation.
    ///
    /// Arguments passed after the first call are dropped unused.
    ///
    /// # Returns
    ///
    /// A `Ref<'_, R>` to the cached result.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics, the wrapper becomes poisoned
    ///   and this call unwinds.
    /// - If the wrapper was already poisoned by an earlier panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::wrapper::Once;
    ///
    /// let wrapper = Once::new(|greeting: &str| greeting.to_uppercase());
    /// assert_eq!(*wrapper.call("hi"), "HI");
    /// assert_eq!(*wrapper.call("bye"), "HI");
    /// ```
    pub fn call(&self, argument: A) -> Ref<'_, R> {
        // Short borrow to decide whether the function still has to run
        let needs_run = {
            let state = self.state.borrow();
            match &*state {
                OnceState::Done(_) => false,
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
                OnceState::Ready(_) => true,
            }
        };

        if needs_run {
            self.run(argument);
        }

        Ref::map(self.state.borrow(), |state| match state {
            OnceState::Done(result) => result,
            _ => panic!("Once should have run at this point"),
        })
    }

    /// Takes the function out, transitions to `Poisoned`, runs it, and
    /// stores the result. A panic in the function leaves the state
    /// `Poisoned`.
    fn run(&self, argument: A) {
        let mut state = self.state.borrow_mut();

        match &*state {
            OnceState::Done(_) => return,
            OnceState::Poisoned => panic!("Once instance has been poisoned"),
            OnceState::Ready(_) => {}
        }

        let OnceState::Ready(function) = std::mem::replace(&mut *state, OnceState::Poisoned)
        else {
            unreachable!()
        };

        let result = function(argument);

        *state = OnceState::Done(result);
    }

    /// Returns whether the wrapped function has run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::wrapper::Once;
    ///
    /// let wrapper = Once::new(|n: i32| n);
    /// assert!(!wrapper.has_run());
    ///
    /// let _ = wrapper.call(1);
    /// assert!(wrapper.has_run());
    /// ```
    #[inline]
    pub fn has_run(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns whether the wrapper has been poisoned by a panic in the
    /// wrapped function.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }

    /// Consumes the wrapper and returns the cached result, if the
    /// wrapped function has run.
    ///
    /// `None` if the function never ran or the wrapper is poisoned.
    pub fn into_result(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Done(result) => Some(result),
            OnceState::Ready(_) | OnceState::Poisoned => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Ready(_) => formatter.debug_tuple("Once").field(&"<ready>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}
