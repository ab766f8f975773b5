//! Data generation utilities for testing.
//!
//! All generators are driven by a [`fastrand::Rng`] seeded by the caller, so a
//! failing case can be reproduced from its seed.

use std::ops::Range;

/// Generates a sequence of `len` integers drawn uniformly from `values`.
pub fn random_sequence(rng: &mut fastrand::Rng, len: usize, values: Range<i64>) -> Vec<i64> {
    (0..len).map(|_| rng.i64(values.clone())).collect()
}

/// Generates a sequence of random length (drawn from `len`) with elements drawn
/// from `values`.
///
/// Small value ranges yield plenty of duplicates, which is what order-preservation
/// checks need.
pub fn random_sized_sequence(
    rng: &mut fastrand::Rng,
    len: Range<usize>,
    values: Range<i64>,
) -> Vec<i64> {
    let len = rng.usize(len);
    random_sequence(rng, len, values)
}

/// Generates `outer` inner sequences, each of length `0..=max_inner`.
///
/// Roughly one in four inner sequences is empty regardless of `max_inner`.
pub fn random_nested(
    rng: &mut fastrand::Rng,
    outer: usize,
    max_inner: usize,
    values: Range<i64>,
) -> Vec<Vec<i64>> {
    (0..outer)
        .map(|_| {
            if rng.u8(..4) == 0 {
                Vec::new()
            } else {
                let len = rng.usize(..=max_inner);
                random_sequence(rng, len, values.clone())
            }
        })
        .collect()
}

/// A predicate over `i64` picked at random from a fixed family, together with a
/// human-readable description for assertion messages.
#[derive(Debug, Clone, Copy)]
pub enum RandomPredicate {
    Always,
    Never,
    DivisibleBy(i64),
    LessThan(i64),
}

impl RandomPredicate {
    pub fn generate(rng: &mut fastrand::Rng) -> RandomPredicate {
        match rng.u8(..4) {
            0 => RandomPredicate::Always,
            1 => RandomPredicate::Never,
            2 => RandomPredicate::DivisibleBy(rng.i64(2..6)),
            _ => RandomPredicate::LessThan(rng.i64(-50..50)),
        }
    }

    pub fn test(&self, value: &i64) -> bool {
        match *self {
            RandomPredicate::Always => true,
            RandomPredicate::Never => false,
            RandomPredicate::DivisibleBy(d) => value.rem_euclid(d) == 0,
            RandomPredicate::LessThan(bound) => *value < bound,
        }
    }
}
