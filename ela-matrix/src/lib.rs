mod base;
mod error;

pub use base::*;
pub use error::*;

pub mod config;
pub mod dense;
pub mod batch;

/// Exact rationals backed by big integers.
pub type Q = ela::Ratio<num_bigint::BigInt>;
