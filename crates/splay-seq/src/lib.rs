//! Ordered sequence container on an implicit-key splay tree.
//!
//! [`SplaySeq`] keeps its elements in a self-adjusting binary tree ordered
//! by position rather than by value. Every node caches the size, sum and
//! monotone run lengths of its subtree, and carries pending (lazy) range
//! updates for its descendants. That makes insertion, removal, range sums,
//! range assignment / addition / reversal and stepping a subrange to its
//! next or previous permutation all amortised O(log n).
//!
//! Nodes live in a `Vec` arena owned by the sequence; child and parent
//! links are `Option<u32>` indices into it. Parent links are only used to
//! walk upward during a splay.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`Element`] scalar trait |
//! [`node`] | [`SeqNode`], subtree [`Summary`], pending [`Lazy`] state |
//! [`lazy`] | `push_down` / `pull_up` discipline |
//! [`splay`] | rotations, splay, rank search, split and merge |
//! [`util`] | link helpers, debug printer, invariant checker |
//!
//! # Example
//!
//! ```
//! use splay_seq::SplaySeq;
//!
//! let mut seq: SplaySeq<i64> = vec![3, 1, 4, 1, 5].into();
//! seq.insert_at(2, 9).unwrap();
//! seq.range_add(1, 4, 10).unwrap();
//! assert_eq!(seq.to_vec(), vec![3, 11, 19, 14, 1, 5]);
//! assert_eq!(seq.range_sum(0, 6).unwrap(), 53);
//! ```

pub mod error;
pub mod iter;
pub mod lazy;
pub mod node;
mod seq;
pub mod splay;
pub mod types;
pub mod util;

pub use error::{Result, SeqError};
pub use iter::Iter;
pub use node::{Lazy, SeqNode, Summary};
pub use seq::SplaySeq;
pub use types::{Element, Node};
