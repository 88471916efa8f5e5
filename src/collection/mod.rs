//! Collection combinators: truth tests, transforms, and accessors.
//!
//! Every function here takes its input by value as an [`IntoIterator`]
//! (or a slice for the borrowing accessors), traverses it in iteration
//! order, and returns a freshly allocated result. Inputs are never
//! mutated.
//!
//! # Examples
//!
//! ## Truth tests
//!
//! ```rust
//! use lowbar::collection::{every, filter, some};
//!
//! let odds = filter(vec![1, 2, 3, 4, 5], |n| n % 2 == 1);
//! assert_eq!(odds, vec![1, 3, 5]);
//!
//! assert!(every(vec![2, 4, 6], |n| n % 2 == 0));
//! assert!(some(vec![1, 2, 3], |n| *n > 2));
//! ```
//!
//! ## Folding
//!
//! ```rust
//! use lowbar::collection::reduce;
//!
//! let total = reduce(vec![1, 2, 3], |sum, n| sum + n, Some(10));
//! assert_eq!(total, 16);
//! ```

mod access;
mod predicate;
mod transform;

pub use access::{first, first_n, index_of, last, last_n};
pub use predicate::{Truthy, contains, every, filter, reject, some, some_truthy};
pub use transform::{
    MethodCatalog, MethodRef, UnknownMethod, invoke, invoke_direct, invoke_named, map, pluck,
    reduce,
};
