//! Method-call syntax for the transformers.
//!
//! # Examples
//!
//! ```
//! use functional_transformers::TransformersExt;
//!
//! let nested = vec![vec![1], vec![2, 3], vec![], vec![4, 5]];
//! assert_eq!(nested.flatten_all(), vec![1, 2, 3, 4, 5]);
//!
//! let odd = (1..=5).select(|x| x % 2 == 1);
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```

use crate::{
    function::{identity, keep_if, negate, singleton},
    transformers::collect_flattened,
};

/// Extension trait exposing the transformers as methods on any `IntoIterator`.
///
/// The receiver is always present, so unlike the free functions these methods
/// cannot fail and return the output `Vec` directly.
pub trait TransformersExt: IntoIterator + Sized {
    /// See [`flatten_transform`](crate::flatten_transform).
    fn flatten_transform<F, C>(self, transformer: F) -> Vec<C::Item>
    where
        F: FnMut(Self::Item) -> C,
        C: IntoIterator,
    {
        collect_flattened(self, transformer)
    }

    /// See [`transform`](crate::transform).
    fn transform<F, O>(self, transformer: F) -> Vec<O>
    where
        F: FnMut(Self::Item) -> O,
    {
        collect_flattened(self, singleton(transformer))
    }

    /// See [`flatten`](crate::flatten). Named so as not to shadow
    /// [`Iterator::flatten`].
    fn flatten_all(self) -> Vec<<Self::Item as IntoIterator>::Item>
    where
        Self::Item: IntoIterator,
    {
        collect_flattened(self, identity())
    }

    /// See [`select`](crate::select).
    fn select<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        collect_flattened(self, keep_if(predicate))
    }

    /// See [`reject`](crate::reject).
    fn reject<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        collect_flattened(self, keep_if(negate(predicate)))
    }
}

impl<I> TransformersExt for I where I: IntoIterator {}
