//! Transform combinators: `map`, `pluck`, `invoke`, and `reduce`.

use std::error::Error;
use std::fmt;

use crate::mapping::OrderedMap;

/// Applies `function` to each element in order.
///
/// The result always has the same length as the input; no filtering
/// happens here.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::map;
///
/// let doubled = map(vec![1, 2, 3], |n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<C, F, U>(sequence: C, function: F) -> Vec<U>
where
    C: IntoIterator,
    F: FnMut(C::Item) -> U,
{
    sequence.into_iter().map(function).collect()
}

/// Extracts the value under `key` from each record, in order.
///
/// A record missing the key contributes `None` rather than an error, so
/// the result length always matches the input length.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::pluck;
/// use lowbar::ordered_map;
///
/// let people = vec![
///     ordered_map! { "name" => "moe", "band" => "stooges" },
///     ordered_map! { "name" => "curly" },
/// ];
/// assert_eq!(pluck(&people, &"band"), vec![Some("stooges"), None]);
/// ```
pub fn pluck<K, V>(records: &[OrderedMap<K, V>], key: &K) -> Vec<Option<V>>
where
    K: PartialEq,
    V: Clone,
{
    records.iter().map(|record| record.get(key).cloned()).collect()
}

/// Folds `function` across the collection in iteration order.
///
/// With `initial: None` the accumulator starts at `B::default()` — the
/// numeric-zero analogue — **not** at the first element. An empty
/// collection therefore never errors: it yields the seed (or the default
/// when no seed was given).
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::reduce;
///
/// // Seeded fold
/// let total = reduce(vec![1, 2, 3], |sum, n| sum + n, Some(10));
/// assert_eq!(total, 16);
///
/// // Unseeded fold starts at the default, not the first element
/// let product = reduce(vec![2, 3, 4], |acc: i32, n| acc * n, None);
/// assert_eq!(product, 0); // 0 * 2 * 3 * 4
/// ```
pub fn reduce<C, B, F>(collection: C, function: F, initial: Option<B>) -> B
where
    C: IntoIterator,
    B: Default,
    F: FnMut(B, C::Item) -> B,
{
    collection
        .into_iter()
        .fold(initial.unwrap_or_default(), function)
}

/// Error returned when a named method is not part of an element's
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod {
    name: String,
}

impl UnknownMethod {
    /// Creates an error for the given method name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The method name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownMethod {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown method `{}`", self.name)
    }
}

impl Error for UnknownMethod {}

/// A catalog of named methods callable on a value.
///
/// Implementing this trait lets [`invoke`] dispatch on a method *name*
/// chosen at run time. Unknown names must return [`UnknownMethod`]
/// rather than panicking; [`invoke`] propagates the error to its caller
/// unmodified.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::{MethodCatalog, UnknownMethod};
///
/// struct Celsius(f64);
///
/// impl MethodCatalog<f64, f64> for Celsius {
///     fn dispatch(&self, name: &str, argument: f64) -> Result<f64, UnknownMethod> {
///         match name {
///             "plus" => Ok(self.0 + argument),
///             "scaled" => Ok(self.0 * argument),
///             _ => Err(UnknownMethod::new(name)),
///         }
///     }
/// }
/// ```
pub trait MethodCatalog<A, R> {
    /// Calls the method `name` on `self` with `argument`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownMethod`] if `name` is not in the catalog.
    fn dispatch(&self, name: &str, argument: A) -> Result<R, UnknownMethod>;
}

/// The method to apply in [`invoke`]: either a name resolved through the
/// element's [`MethodCatalog`], or a function applied directly with the
/// element as receiver.
///
/// The caller picks the variant explicitly; there is no run-time
/// inspection of the argument.
#[derive(Debug, Clone)]
pub enum MethodRef<F> {
    /// Dispatch through [`MethodCatalog::dispatch`] by name.
    Named(String),
    /// Call the function with the element as receiver.
    Direct(F),
}

/// Calls `method` on each element with `argument`, collecting results in
/// order.
///
/// # Errors
///
/// Returns [`UnknownMethod`] at the first element whose catalog does not
/// know the requested name. Elements before the failing one are
/// discarded; the input is not partially consumed from the caller's
/// point of view.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::{MethodCatalog, MethodRef, UnknownMethod, invoke};
///
/// struct Account(i64);
///
/// impl MethodCatalog<i64, i64> for Account {
///     fn dispatch(&self, name: &str, argument: i64) -> Result<i64, UnknownMethod> {
///         match name {
///             "deposit" => Ok(self.0 + argument),
///             _ => Err(UnknownMethod::new(name)),
///         }
///     }
/// }
///
/// let accounts = vec![Account(100), Account(250)];
/// let method = MethodRef::<fn(&Account, i64) -> i64>::Named("deposit".to_owned());
/// assert_eq!(invoke(accounts, method, 50), Ok(vec![150, 300]));
/// ```
pub fn invoke<C, A, R, F>(
    sequence: C,
    method: MethodRef<F>,
    argument: A,
) -> Result<Vec<R>, UnknownMethod>
where
    C: IntoIterator,
    C::Item: MethodCatalog<A, R>,
    A: Clone,
    F: FnMut(&C::Item, A) -> R,
{
    let mut method = method;
    let mut results = Vec::new();
    for element in sequence {
        let result = match &mut method {
            MethodRef::Named(name) => element.dispatch(name, argument.clone())?,
            MethodRef::Direct(function) => function(&element, argument.clone()),
        };
        results.push(result);
    }
    Ok(results)
}

/// [`invoke`] with the [`MethodRef::Named`] variant fixed.
///
/// # Errors
///
/// Returns [`UnknownMethod`] if `name` is not in the element catalog.
pub fn invoke_named<C, A, R>(
    sequence: C,
    name: &str,
    argument: A,
) -> Result<Vec<R>, UnknownMethod>
where
    C: IntoIterator,
    C::Item: MethodCatalog<A, R>,
    A: Clone,
{
    invoke(
        sequence,
        MethodRef::<fn(&C::Item, A) -> R>::Named(name.to_owned()),
        argument,
    )
}

/// [`invoke`] with the [`MethodRef::Direct`] variant fixed.
///
/// # Errors
///
/// Never fails in practice; the `Result` mirrors [`invoke`]'s signature.
pub fn invoke_direct<C, A, R, F>(
    sequence: C,
    function: F,
    argument: A,
) -> Result<Vec<R>, UnknownMethod>
where
    C: IntoIterator,
    C::Item: MethodCatalog<A, R>,
    A: Clone,
    F: FnMut(&C::Item, A) -> R,
{
    invoke(sequence, MethodRef::Direct(function), argument)
}
