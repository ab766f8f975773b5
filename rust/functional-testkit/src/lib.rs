//! Test utilities and helpers for the functional-* crates.
//!
//! This crate provides:
//! - Seeded random data generation for property-style tests
//! - A call recorder for observing how callbacks are invoked
//!
//! # Usage
//!
//! This crate is intended for use within the workspace test suites only.

pub mod data_gen;
pub mod probe;
