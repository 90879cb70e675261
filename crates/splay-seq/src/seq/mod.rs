//! [`SplaySeq`]: an editable sequence with range sums, lazy range
//! updates and in-place permutation stepping.
//!
//! Every range operation follows the same shape: split the tree into
//! `[0, start)`, `[start, end)` and `[end, len)`, operate on the middle
//! tree, merge the three parts back. Read-only queries do the same round
//! trip, so they take `&mut self` too.

mod permutation;

use std::fmt;

use crate::error::{check_index, check_range, Result};
use crate::iter::Iter;
use crate::lazy::{effective, pull_up, push_down};
use crate::node::{Lazy, SeqNode};
use crate::splay::split::{merge_range, split_range};
use crate::splay::{merge_concat, search_by_rank, size_of, splay, split_at};
use crate::types::Element;
use crate::util::{assert_splay_seq, attach, print};

/// Ordered sequence backed by an implicit-key splay tree.
///
/// Nodes live in an arena owned by the sequence; erased slots are recycled.
pub struct SplaySeq<T> {
    arena: Vec<SeqNode<T>>,
    free: Vec<u32>,
    root: Option<u32>,
}

impl<T: Element> Default for SplaySeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> SplaySeq<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `capacity` elements before
    /// the node arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
        }
    }

    /// Number of elements. O(1).
    pub fn len(&self) -> usize {
        size_of(&self.arena, self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
    }

    fn alloc(&mut self, value: T) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = SeqNode::new(value);
                i
            }
            None => {
                debug_assert!(self.arena.len() < u32::MAX as usize, "node arena exhausted");
                self.arena.push(SeqNode::new(value));
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Builds a balanced tree over `values`, allocating one node per
    /// element, and returns its root.
    fn build(&mut self, values: &[T]) -> Option<u32> {
        let ids: Vec<u32> = values.iter().map(|&v| self.alloc(v)).collect();
        link_balanced(&mut self.arena, &ids)
    }

    /// Splits out `[start, end)`, hands its root to `f`, then merges the
    /// root `f` returns back in place. Bounds must already be checked.
    fn with_range<R, F>(&mut self, start: usize, end: usize, f: F) -> R
    where
        F: FnOnce(&mut [SeqNode<T>], Option<u32>) -> (Option<u32>, R),
    {
        let (head, mid, tail) = split_range(&mut self.arena, self.root.take(), start, end);
        let (mid, out) = f(&mut self.arena, mid);
        self.root = merge_range(&mut self.arena, head, mid, tail);
        out
    }

    /// Queues `lazy` on `[start, end)` and pushes it into the range root
    /// straight away, so the root's own value and summary are current.
    fn apply_range(&mut self, start: usize, end: usize, lazy: Lazy<T>) {
        self.with_range(start, end, |arena, mid| {
            if let Some(m) = mid {
                push_down(arena, m);
                arena[m as usize].tag(&lazy);
                push_down(arena, m);
            }
            (mid, ())
        });
    }

    #[inline]
    fn after_mutation(&self) {
        if !cfg!(feature = "validate") {
            return;
        }
        if let Err(err) = self.validate() {
            panic!("splay-seq invariant violated: {err}\n{}", self.dump());
        }
    }

    /// Inserts `value` so that it ends up at position `k`, `k` in `[0, len]`.
    pub fn insert_at(&mut self, k: usize, value: T) -> Result<()> {
        check_range(k, k, self.len())?;
        log::trace!("insert_at({k}, {value:?})");
        let node = self.alloc(value);
        let (head, tail) = split_at(&mut self.arena, self.root.take(), k);
        self.root = merge_range(&mut self.arena, head, Some(node), tail);
        self.after_mutation();
        Ok(())
    }

    pub fn push_back(&mut self, value: T) {
        let node = self.alloc(value);
        self.root = merge_concat(&mut self.arena, self.root.take(), Some(node));
        self.after_mutation();
    }

    pub fn push_front(&mut self, value: T) {
        let node = self.alloc(value);
        self.root = merge_concat(&mut self.arena, Some(node), self.root.take());
        self.after_mutation();
    }

    /// Removes and returns the element at position `k`, `k` in `[0, len)`.
    pub fn erase_at(&mut self, k: usize) -> Result<T> {
        check_index(k, self.len())?;
        log::trace!("erase_at({k})");
        let (head, mid, tail) = split_range(&mut self.arena, self.root.take(), k, k + 1);
        self.root = merge_concat(&mut self.arena, head, tail);
        let mut removed = T::default();
        if let Some(m) = mid {
            push_down(&mut self.arena, m);
            removed = self.arena[m as usize].value;
            self.free.push(m);
        }
        self.after_mutation();
        Ok(removed)
    }

    /// Element at position `k`. Splays it to the root.
    pub fn get(&mut self, k: usize) -> Result<T> {
        check_index(k, self.len())?;
        let x = search_by_rank(&mut self.arena, self.root, k)?;
        let x = splay(&mut self.arena, x);
        self.root = Some(x);
        Ok(self.arena[x as usize].value)
    }

    /// Overwrites the element at position `k`.
    pub fn set(&mut self, k: usize, value: T) -> Result<()> {
        check_index(k, self.len())?;
        self.range_assign(k, k + 1, value)
    }

    /// Sum of the whole sequence; the default value when empty.
    pub fn sum(&self) -> T {
        effective(&self.arena, self.root).map_or_else(T::default, |s| s.sum)
    }

    /// Sum over `[start, end)`.
    pub fn range_sum(&mut self, start: usize, end: usize) -> Result<T> {
        check_range(start, end, self.len())?;
        let sum = self.with_range(start, end, |arena, mid| {
            let sum = match mid {
                Some(m) => {
                    push_down(arena, m);
                    arena[m as usize].agg.sum
                }
                None => T::default(),
            };
            (mid, sum)
        });
        log::trace!("range_sum({start}, {end}) = {sum:?}");
        Ok(sum)
    }

    /// Sets every element in `[start, end)` to `value`.
    pub fn range_assign(&mut self, start: usize, end: usize, value: T) -> Result<()> {
        check_range(start, end, self.len())?;
        log::trace!("range_assign({start}, {end}, {value:?})");
        self.apply_range(start, end, Lazy::assign(value));
        self.after_mutation();
        Ok(())
    }

    /// Adds `delta` to every element in `[start, end)`.
    pub fn range_add(&mut self, start: usize, end: usize, delta: T) -> Result<()> {
        check_range(start, end, self.len())?;
        log::trace!("range_add({start}, {end}, {delta:?})");
        self.apply_range(start, end, Lazy::add(delta));
        self.after_mutation();
        Ok(())
    }

    /// Reverses the order of the elements in `[start, end)`.
    pub fn reverse_range(&mut self, start: usize, end: usize) -> Result<()> {
        check_range(start, end, self.len())?;
        log::trace!("reverse_range({start}, {end})");
        self.apply_range(start, end, Lazy::reverse());
        self.after_mutation();
        Ok(())
    }

    /// In-order iterator over the current values. Does not restructure the
    /// tree.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.root)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Checks every structural and aggregate invariant of the tree.
    pub fn validate(&self) -> std::result::Result<(), String> {
        assert_splay_seq(&self.arena, self.root)?;
        let live = self.arena.len() - self.free.len();
        if live != self.len() {
            return Err(format!(
                "{live} live arena slots but the tree holds {}",
                self.len()
            ));
        }
        Ok(())
    }

    /// Indented rendering of the tree shape, for debugging.
    pub fn dump(&self) -> String {
        format!("SplaySeq\n{}", print(&self.arena, self.root, ""))
    }
}

/// Links the nodes `ids` (already in sequence order) into a balanced tree
/// and returns its root.
fn link_balanced<T: Element>(arena: &mut [SeqNode<T>], ids: &[u32]) -> Option<u32> {
    if ids.is_empty() {
        return None;
    }
    let mid = ids.len() / 2;
    let x = ids[mid];
    let l = link_balanced(arena, &ids[..mid]);
    let r = link_balanced(arena, &ids[mid + 1..]);
    attach(arena, x, l, true);
    attach(arena, x, r, false);
    pull_up(arena, x);
    Some(x)
}

impl<T: Element> Extend<T> for SplaySeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let values: Vec<T> = iter.into_iter().collect();
        let built = self.build(&values);
        self.root = merge_concat(&mut self.arena, self.root.take(), built);
        self.after_mutation();
    }
}

impl<T: Element> FromIterator<T> for SplaySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T: Element> From<Vec<T>> for SplaySeq<T> {
    fn from(values: Vec<T>) -> Self {
        let mut seq = Self::with_capacity(values.len());
        seq.root = seq.build(&values);
        seq.after_mutation();
        seq
    }
}

impl<T: Element> From<&[T]> for SplaySeq<T> {
    fn from(values: &[T]) -> Self {
        values.to_vec().into()
    }
}

impl<T: Element> fmt::Debug for SplaySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Element> IntoIterator for &'a SplaySeq<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
