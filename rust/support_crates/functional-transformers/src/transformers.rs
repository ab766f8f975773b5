//! Eager collection transformers built on a single map-then-flatten primitive.
//!
//! Every operation takes the input sequence as `Option<B>` where `B: IntoIterator`.
//! `None` stands for an absent sequence and is rejected with an
//! `InvalidArgument` error before any callback is invoked. Otherwise the
//! sequence is traversed exactly once, in its iteration order, and the output is
//! collected into a freshly allocated `Vec`.
//!
//! Panics raised by a callback unwind through the traversal untouched. The
//! `try_*` variants accept callbacks returning `Result` instead: the first error
//! aborts the traversal and is handed back to the caller unchanged, while a
//! missing sequence is converted into the caller's error type via
//! `From<functional_common::Error>`.
//!
//! # Examples
//!
//! ```
//! use functional_transformers::{flatten_transform, reject, select, transform};
//!
//! let odd_squares = flatten_transform(Some(1..=5), |x| {
//!     if x % 2 == 1 { vec![x * x] } else { vec![] }
//! })
//! .unwrap();
//! assert_eq!(odd_squares, vec![1, 9, 25]);
//!
//! assert_eq!(transform(Some(1..=5), |x| x * x).unwrap(), vec![1, 4, 9, 16, 25]);
//! assert_eq!(select(Some(1..=5), |x| x % 2 == 1).unwrap(), vec![1, 3, 5]);
//! assert_eq!(reject(Some(1..=5), |x| x % 2 == 1).unwrap(), vec![2, 4]);
//! ```

use std::convert::Infallible;

use functional_common::{Error, Result};

use crate::function::{identity, keep_if, negate, singleton};

/// Applies `transformer` to each element of `base` and concatenates the produced
/// collections, in input order, into one flat `Vec`.
///
/// For instance, `[1, 2, 3, 4, 5]` with a transformer returning `[x * x]` for odd
/// numbers and `[]` for even ones yields `[1, 9, 25]`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `base` is `None`; the transformer is not called.
pub fn flatten_transform<B, F, C>(base: Option<B>, transformer: F) -> Result<Vec<C::Item>>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> C,
    C: IntoIterator,
{
    apply("flatten_transform", base, transformer)
}

/// Maps every element of `base` through `transformer`, one-to-one.
///
/// The output has the same length and order as the input. Equivalent to
/// [`flatten_transform`] with a transformer producing a single-element collection.
pub fn transform<B, F, O>(base: Option<B>, transformer: F) -> Result<Vec<O>>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> O,
{
    apply("transform", base, singleton(transformer))
}

/// Concatenates a sequence of collections into a single `Vec`.
///
/// Outer order is preserved, and within each inner collection its own iteration
/// order. Empty inner collections contribute nothing.
pub fn flatten<B>(base: Option<B>) -> Result<Vec<<B::Item as IntoIterator>::Item>>
where
    B: IntoIterator,
    B::Item: IntoIterator,
{
    apply("flatten", base, identity())
}

/// Keeps the elements of `base` for which `predicate` holds, in input order.
pub fn select<B, P>(base: Option<B>, predicate: P) -> Result<Vec<B::Item>>
where
    B: IntoIterator,
    P: FnMut(&B::Item) -> bool,
{
    apply("select", base, keep_if(predicate))
}

/// Keeps the elements of `base` for which `predicate` does not hold, in input order.
///
/// This is [`select`] with the predicate negated: for the same `base` and
/// `predicate`, `select` and `reject` partition the input.
pub fn reject<B, P>(base: Option<B>, predicate: P) -> Result<Vec<B::Item>>
where
    B: IntoIterator,
    P: FnMut(&B::Item) -> bool,
{
    apply("reject", base, keep_if(negate(predicate)))
}

/// Fallible counterpart of [`flatten_transform`].
///
/// The first `Err` returned by `transformer` stops the traversal and is returned
/// as-is; no partial output is produced.
pub fn try_flatten_transform<B, F, C, E>(
    base: Option<B>,
    transformer: F,
) -> std::result::Result<Vec<C::Item>, E>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> std::result::Result<C, E>,
    C: IntoIterator,
    E: From<Error>,
{
    try_apply("try_flatten_transform", base, transformer)
}

/// Fallible counterpart of [`transform`].
pub fn try_transform<B, F, O, E>(
    base: Option<B>,
    mut transformer: F,
) -> std::result::Result<Vec<O>, E>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> std::result::Result<O, E>,
    E: From<Error>,
{
    try_apply("try_transform", base, |input| transformer(input).map(std::iter::once))
}

/// Fallible counterpart of [`select`].
pub fn try_select<B, P, E>(
    base: Option<B>,
    mut predicate: P,
) -> std::result::Result<Vec<B::Item>, E>
where
    B: IntoIterator,
    P: FnMut(&B::Item) -> std::result::Result<bool, E>,
    E: From<Error>,
{
    try_apply("try_select", base, |input| {
        predicate(&input).map(|keep| keep.then_some(input))
    })
}

/// Fallible counterpart of [`reject`].
pub fn try_reject<B, P, E>(
    base: Option<B>,
    mut predicate: P,
) -> std::result::Result<Vec<B::Item>, E>
where
    B: IntoIterator,
    P: FnMut(&B::Item) -> std::result::Result<bool, E>,
    E: From<Error>,
{
    try_apply("try_reject", base, |input| {
        predicate(&input).map(|keep| (!keep).then_some(input))
    })
}

/// Appends the flattened output of `transformer` over `base` to a new `Vec`.
///
/// `base` is already known to be present here.
pub(crate) fn collect_flattened<B, F, C>(base: B, mut transformer: F) -> Vec<C::Item>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> C,
    C: IntoIterator,
{
    match try_collect_flattened(base, |input| Ok::<_, Infallible>(transformer(input))) {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// The traversal shared by every operation: one pass over `base`, stopping at the
/// first error produced by `transformer`.
fn try_collect_flattened<B, F, C, E>(
    base: B,
    mut transformer: F,
) -> std::result::Result<Vec<C::Item>, E>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> std::result::Result<C, E>,
    C: IntoIterator,
{
    let iter = base.into_iter();
    let mut result = Vec::with_capacity(iter.size_hint().0);
    for input in iter {
        result.extend(transformer(input)?);
    }
    Ok(result)
}

fn apply<B, F, C>(op: &'static str, base: Option<B>, transformer: F) -> Result<Vec<C::Item>>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> C,
    C: IntoIterator,
{
    let base = required_base(op, base)?;
    let result = collect_flattened(base, transformer);
    log::trace!("{op}: produced {} elements", result.len());
    Ok(result)
}

fn try_apply<B, F, C, E>(
    op: &'static str,
    base: Option<B>,
    transformer: F,
) -> std::result::Result<Vec<C::Item>, E>
where
    B: IntoIterator,
    F: FnMut(B::Item) -> std::result::Result<C, E>,
    C: IntoIterator,
    E: From<Error>,
{
    let base = required_base(op, base)?;
    let result = try_collect_flattened(base, transformer)?;
    log::trace!("{op}: produced {} elements", result.len());
    Ok(result)
}

fn required_base<B>(op: &'static str, base: Option<B>) -> Result<B> {
    if base.is_none() {
        log::debug!("{op}: rejected absent input sequence");
    }
    Ok(functional_common::require_arg!(base))
}
