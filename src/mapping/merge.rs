//! Merging maps: `extend` and `defaults`.

use super::OrderedMap;

/// Folds every source map's entries into `target`, in order.
///
/// Later sources overwrite values written by earlier ones; existing keys
/// keep their original position in `target`.
///
/// # Examples
///
/// ```rust
/// use lowbar::mapping::extend;
/// use lowbar::ordered_map;
///
/// let merged = extend(
///     ordered_map! { "a" => 1 },
///     vec![ordered_map! { "b" => 2 }, ordered_map! { "a" => 10 }],
/// );
/// assert_eq!(merged.get(&"a"), Some(&10));
/// assert_eq!(merged.get(&"b"), Some(&2));
/// ```
pub fn extend<K, V, S>(target: OrderedMap<K, V>, sources: S) -> OrderedMap<K, V>
where
    K: PartialEq,
    S: IntoIterator<Item = OrderedMap<K, V>>,
{
    let mut target = target;
    for source in sources {
        for (key, value) in source {
            target.insert(key, value);
        }
    }
    target
}

/// Like [`extend`], but never overwrites a key already present.
///
/// # Examples
///
/// ```rust
/// use lowbar::mapping::defaults;
/// use lowbar::ordered_map;
///
/// let filled = defaults(
///     ordered_map! { "theme" => "dark" },
///     vec![ordered_map! { "theme" => "light", "font" => "mono" }],
/// );
/// assert_eq!(filled.get(&"theme"), Some(&"dark"));
/// assert_eq!(filled.get(&"font"), Some(&"mono"));
/// ```
pub fn defaults<K, V, S>(target: OrderedMap<K, V>, sources: S) -> OrderedMap<K, V>
where
    K: PartialEq,
    S: IntoIterator<Item = OrderedMap<K, V>>,
{
    let mut target = target;
    for source in sources {
        for (key, value) in source {
            if !target.contains_key(&key) {
                target.insert(key, value);
            }
        }
    }
    target
}
