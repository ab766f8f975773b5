//! Small building blocks for the callables passed to the transformers.
//!
//! Transformers and predicates are plain closures (`FnMut`), invoked once per
//! input element and never retained past the call that received them.

/// Returns a function that yields its input unchanged.
///
/// Used by [`flatten`](crate::flatten), where each inner collection is passed
/// through as-is and concatenated into the output.
#[inline]
pub fn identity<T>() -> fn(T) -> T {
    std::convert::identity
}

/// Wraps a predicate so that it returns the logical negation of its result.
pub fn negate<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
{
    move |input| !predicate(input)
}

/// Returns a transformer that keeps its input when `predicate` holds and drops it
/// otherwise.
///
/// The produced collection is an `Option`, i.e. a collection of zero or one
/// element.
pub fn keep_if<T, P>(mut predicate: P) -> impl FnMut(T) -> Option<T>
where
    P: FnMut(&T) -> bool,
{
    move |input| predicate(&input).then_some(input)
}

/// Returns a transformer that wraps the result of `transformer` into a
/// one-element collection.
pub fn singleton<I, O, F>(mut transformer: F) -> impl FnMut(I) -> std::iter::Once<O>
where
    F: FnMut(I) -> O,
{
    move |input| std::iter::once(transformer(input))
}
