//! Higher-order collection utilities.
//!
//! This crate provides eager transformations over sequences, all expressed
//! through a single map-then-flatten primitive:
//!
//! - [`flatten_transform`] - applies a function producing a collection to each
//!   element and concatenates the results
//! - [`transform`] - one-to-one mapping
//! - [`flatten`] - concatenation of a sequence of collections
//! - [`select`] / [`reject`] - order-preserving filtering and its complement
//!
//! Each operation validates that the input sequence is present and fails with an
//! `InvalidArgument` error otherwise. The `try_*` variants accept fallible
//! callbacks, and [`TransformersExt`] exposes the same operations as methods.

pub mod ext;
pub mod function;
pub mod transformers;

pub use ext::TransformersExt;
pub use transformers::{
    flatten, flatten_transform, reject, select, transform, try_flatten_transform, try_reject,
    try_select, try_transform,
};
