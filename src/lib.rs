//! # lowbar
//!
//! A lightweight functional utility library providing collection
//! combinators, structural algorithms, and function wrappers.
//!
//! ## Overview
//!
//! This library collects the small higher-order building blocks that
//! general-purpose application code reaches for again and again, without
//! pulling in a full-featured framework:
//!
//! - **Predicate Combinators**: `filter`, `reject`, `every`, `some`, `contains`
//! - **Transform Combinators**: `map`, `pluck`, `invoke`, `reduce`
//! - **Structural Algorithms**: `uniq`, `sort_by`, `zip`, `flatten`,
//!   `intersection`, `difference`
//! - **Function Wrappers**: [`Once`](wrapper::Once), [`Memoize`](wrapper::Memoize),
//!   and deferred execution via [`delay`](wrapper::delay)
//! - **Ordered Mapping**: [`OrderedMap`](mapping::OrderedMap), an
//!   insertion-ordered key-value map, with `extend` and `defaults` merges
//!
//! Every operation returns a fresh value; inputs are never mutated.
//! Wrapper state is private to each wrapper instance.
//!
//! ## Feature Flags
//!
//! - `collection`: predicate, transform, and access combinators
//! - `structural`: uniq, sorting, zip, flatten, and set-like operations
//! - `wrapper`: `Once` and `Memoize` function wrappers
//! - `delay`: deferred execution on the tokio timer
//! - `mapping`: the `OrderedMap` support type
//! - `shuffle`: uniformly shuffled copies (off by default)
//! - `full`: enable everything
//!
//! ## Example
//!
//! ```rust
//! use lowbar::prelude::*;
//!
//! let evens = filter(vec![1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let distinct = uniq(vec![1, 1, 2, 3, 2]);
//! assert_eq!(distinct, vec![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and types.
///
/// # Usage
///
/// ```rust
/// use lowbar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "structural")]
    pub use crate::structural::*;

    #[cfg(feature = "wrapper")]
    pub use crate::wrapper::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "structural")]
pub mod structural;

#[cfg(feature = "wrapper")]
pub mod wrapper;

#[cfg(feature = "mapping")]
pub mod mapping;
