//! Link and element trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena and every "pointer" is an
//! `Option<u32>` index into it. Children are owned through `l` / `r`;
//! `p` is a back-reference used only to walk upward during a splay.

use std::fmt::Debug;

/// Arena links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Scalar stored in a [`SplaySeq`](crate::SplaySeq).
///
/// `Default::default()` must be the additive identity. Ordering drives the
/// run-length bookkeeping used by the permutation operations, addition
/// drives range sums and additive updates.
pub trait Element: Copy + Ord + Default + Debug {
    /// `self + rhs`.
    fn add(self, rhs: Self) -> Self;

    /// Sum of `count` copies of `self`, by doubling and adding.
    ///
    /// `count` is never narrowed to `Self`, and no partial sum exceeds the
    /// final one in magnitude. So this overflows exactly when the true sum
    /// does not fit, in whatever way `add` overflows.
    fn times(self, count: usize) -> Self {
        let mut acc = Self::default();
        let mut base = self;
        let mut n = count;
        loop {
            if n & 1 == 1 {
                acc = acc.add(base);
            }
            n >>= 1;
            if n == 0 {
                return acc;
            }
            base = base.add(base);
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
