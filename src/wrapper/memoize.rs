//! Memoization keyed by the argument's display rendering.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A wrapper that caches results per distinct argument.
///
/// Each call renders the argument with [`Display`](fmt::Display) and
/// looks the rendering up in a private cache: on a hit the cached result
/// is cloned back without running the wrapped function; on a miss the
/// function runs once and its result is stored. A side-effecting wrapped
/// function therefore executes at most once per distinct argument.
///
/// # Type Parameters
///
/// * `A` - The argument type; its `Display` rendering is the cache key
/// * `R` - The result type
/// * `F` - The wrapped function (defaults to `fn(A) -> R`)
///
/// # Cache Key Limitation
///
/// Two arguments with identical `Display` renderings share a cache slot
/// and collide. This is a documented property of the rendering-keyed
/// cache, not something the wrapper detects or repairs.
///
/// # Thread Safety
///
/// This type is NOT thread-safe, matching the library's single-threaded
/// contract, and is not reentrant: a wrapped function that calls back
/// into the same wrapper panics on the nested borrow.
///
/// # Examples
///
/// ```rust
/// use lowbar::wrapper::Memoize;
/// use std::cell::Cell;
///
/// let runs = Cell::new(0);
/// let double = Memoize::new(|n: u64| {
///     runs.set(runs.get() + 1);
///     n * 2
/// });
///
/// assert_eq!(double.call(21), 42);
/// assert_eq!(double.call(21), 42);
/// assert_eq!(runs.get(), 1); // second call was served from the cache
///
/// assert_eq!(double.call(5), 10);
/// assert_eq!(runs.get(), 2); // distinct argument, computed once more
/// ```
pub struct Memoize<A, R, F = fn(A) -> R> {
    function: RefCell<F>,
    cache: RefCell<HashMap<String, R>>,
    _signature: PhantomData<fn(A) -> R>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: fmt::Display,
    R: Clone,
    F: FnMut(A) -> R,
{
    /// Creates a wrapper around `function` with an empty cache.
    ///
    /// Each wrapper owns its own cache; two wrappers around the same
    /// function do not share results.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: RefCell::new(function),
            cache: RefCell::new(HashMap::new()),
            _signature: PhantomData,
        }
    }

    /// Returns the cached result for `argument`, computing and caching
    /// it first if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lowbar::wrapper::Memoize;
    ///
    /// let length = Memoize::new(|word: String| word.len());
    /// assert_eq!(length.call("curly".to_owned()), 5);
    /// ```
    pub fn call(&self, argument: A) -> R {
        let key = argument.to_string();
        if let Some(cached) = self.cache.borrow().get(&key) {
            return cached.clone();
        }

        let mut function = self.function.borrow_mut();
        let result = (*function)(argument);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// Returns whether a result for `argument` is already cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.borrow().contains_key(&argument.to_string())
    }

    /// Returns the number of distinct arguments cached so far.
    #[inline]
    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
