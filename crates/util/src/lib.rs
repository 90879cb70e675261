//! splay-seq-util - test support for splay-seq
//!
//! - [`fuzzer`]: seeded random workload generation.
//! - [`naive`]: a `Vec`-backed oracle implementing the same operations.

pub mod fuzzer;
pub mod naive;

// Re-exports for convenience
pub use fuzzer::{Fuzzer, Op};
pub use naive::{next_permutation, prev_permutation, NaiveSeq, Outcome};
