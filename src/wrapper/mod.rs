//! Function wrappers with private, per-instance state.
//!
//! Each wrapper takes a caller-supplied function at construction and
//! exposes a single invoke operation with modified semantics:
//!
//! - [`Once`]: the wrapped function runs at most one time; later calls
//!   return the cached first result.
//! - [`Memoize`]: the wrapped function runs once per distinct argument;
//!   results are cached in a private map.
//! - [`delay`]: the wrapped function runs asynchronously after a wait,
//!   off the caller's immediate execution path.
//!
//! Two independently constructed wrappers never share state.
//!
//! # Examples
//!
//! ## Call at most once
//!
//! ```rust
//! use lowbar::wrapper::Once;
//!
//! let initialize = Once::new(|name: &str| format!("hello, {name}"));
//!
//! assert_eq!(*initialize.call("ada"), "hello, ada");
//! // Later calls return the first result, whatever the argument
//! assert_eq!(*initialize.call("grace"), "hello, ada");
//! ```
//!
//! ## Memoization
//!
//! ```rust
//! use lowbar::wrapper::Memoize;
//!
//! let square = Memoize::new(|n: u64| n * n);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144); // served from the cache
//! ```

#[cfg(feature = "delay")]
mod delay;
mod memoize;
mod once;

#[cfg(feature = "delay")]
pub use delay::{DelayHandle, delay};
pub use memoize::Memoize;
pub use once::{Once, OnceState};
