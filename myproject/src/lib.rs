#![forbid(unsafe_code)]

//! myproject — integer arithmetic.
//!
//! `add` and `multiply` are the whole public arithmetic surface and are
//! re-exported here so callers write `myproject::add`. The fixture and
//! conformance modules replay the reference scenarios from a JSON file.

/// Crate version, as built.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod arithmetic;
pub mod fixtures;
pub mod conformance;

pub use arithmetic::{add, multiply};
