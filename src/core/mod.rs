//! Deterministic Primitives
//!
//! Hashing and Merkle proof verification. Everything here is pure:
//! no clocks, no randomness, no I/O.

pub mod hash;
pub mod merkle;

pub use hash::{ClaimHasher, Hash256};
