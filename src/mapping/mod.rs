//! Insertion-ordered key-value mapping.
//!
//! This module provides [`OrderedMap`], the mapping half of the library's
//! collection model, together with the [`extend`] and [`defaults`] merge
//! operations.
//!
//! Unlike a hash map, an `OrderedMap` iterates its entries in insertion
//! order, and re-inserting an existing key replaces the value without
//! moving the entry. That makes it a faithful record type for operations
//! such as [`pluck`](crate::collection::pluck) and
//! [`sort_by_field`](crate::structural::sort_by_field).
//!
//! # Examples
//!
//! ```rust
//! use lowbar::mapping::OrderedMap;
//! use lowbar::ordered_map;
//!
//! let mut settings = OrderedMap::new();
//! settings.insert("theme", "dark");
//! settings.insert("font", "mono");
//!
//! let keys: Vec<_> = settings.keys().collect();
//! assert_eq!(keys, vec![&"theme", &"font"]);
//!
//! // The macro form builds the same map
//! let same = ordered_map! { "theme" => "dark", "font" => "mono" };
//! assert_eq!(settings, same);
//! ```

mod merge;
mod ordered_map;

pub use merge::{defaults, extend};
pub use ordered_map::OrderedMap;

/// Builds an [`OrderedMap`] from `key => value` pairs in written order.
///
/// # Examples
///
/// ```rust
/// use lowbar::ordered_map;
///
/// let record = ordered_map! { "name" => "ada", "role" => "engineer" };
/// assert_eq!(record.get(&"name"), Some(&"ada"));
/// assert_eq!(record.len(), 2);
/// ```
#[macro_export]
macro_rules! ordered_map {
    () => {
        $crate::mapping::OrderedMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::mapping::OrderedMap::new();
        $( map.insert($key, $value); )+
        map
    }};
}
