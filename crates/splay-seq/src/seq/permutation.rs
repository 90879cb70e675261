//! Lexicographic next / previous permutation over a subrange.
//!
//! The cached run lengths give the length of the monotone tail of the
//! range directly, so the pivot is found without scanning. The swap
//! partner is found with one value-guided descent into the tail.

use crate::error::{check_range, Result};
use crate::lazy::{pull_up, push_down};
use crate::node::{Lazy, SeqNode};
use crate::splay::{last, merge_concat, partition_point, search_by_rank, splay, split_at};
use crate::types::Element;

use super::SplaySeq;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Next,
    Prev,
}

impl<T: Element> SplaySeq<T> {
    /// Rearranges `[start, end)` into the next lexicographically greater
    /// permutation. When the range is already the greatest one it wraps
    /// around to the smallest (sorted ascending) and `false` is returned.
    ///
    /// Equal elements are treated as indistinguishable, so a range with
    /// duplicates cycles through its distinct arrangements only.
    pub fn next_permutation_in_range(&mut self, start: usize, end: usize) -> Result<bool> {
        self.step_permutation(start, end, Step::Next)
    }

    /// Mirror of [`next_permutation_in_range`](Self::next_permutation_in_range):
    /// steps to the previous permutation, wrapping from the smallest to the
    /// greatest.
    pub fn prev_permutation_in_range(&mut self, start: usize, end: usize) -> Result<bool> {
        self.step_permutation(start, end, Step::Prev)
    }

    fn step_permutation(&mut self, start: usize, end: usize, step: Step) -> Result<bool> {
        check_range(start, end, self.len())?;
        let stepped = self.with_range(start, end, |arena, mid| match mid {
            Some(m) => step_tree(arena, m, step),
            None => (None, false),
        });
        log::trace!("{step:?} permutation on {start}..{end}: stepped={stepped}");
        self.after_mutation();
        Ok(stepped)
    }
}

/// Steps the permutation held by the tree rooted at `m` and returns the new
/// root plus whether a non-wrapping step happened.
fn step_tree<T: Element>(arena: &mut [SeqNode<T>], m: u32, step: Step) -> (Option<u32>, bool) {
    push_down(arena, m);
    let agg = arena[m as usize].agg;
    let tail_len = match step {
        Step::Next => agg.suffix_dec,
        Step::Prev => agg.suffix_inc,
    };

    if tail_len == agg.size {
        log::trace!("permutation wraps around over {} elements", agg.size);
        arena[m as usize].tag(&Lazy::reverse());
        push_down(arena, m);
        return (Some(m), false);
    }

    // Pivot: the element just before the monotone tail.
    let (head, tail) = split_at(arena, Some(m), agg.size - tail_len);
    let (Some(head), Some(tail)) = (head, tail) else {
        return (merge_concat(arena, head, tail), false);
    };
    let pivot = last(arena, head);
    let pivot = splay(arena, pivot);
    let pivot_value = arena[pivot as usize].value;

    // The tail is monotone, so the elements that may replace the pivot form
    // its prefix; the swap partner is the last of them.
    let (beats, tail) = partition_point(arena, tail, |v| match step {
        Step::Next => v > pivot_value,
        Step::Prev => v < pivot_value,
    });
    debug_assert!(beats > 0, "monotone tail must contain a swap partner");
    let Some(partner) = swap_partner(arena, tail, beats) else {
        log::debug!("no swap partner for pivot {pivot_value:?}, range left unchanged");
        return (merge_concat(arena, Some(pivot), Some(tail)), false);
    };
    let partner = splay(arena, partner);
    let partner_value = arena[partner as usize].value;
    arena[partner as usize].value = pivot_value;
    arena[pivot as usize].value = partner_value;
    pull_up(arena, partner);
    pull_up(arena, pivot);
    let tail = partner;

    // The tail keeps its monotone order after the swap; reversing it yields
    // the smallest (resp. greatest) arrangement of the tail.
    arena[tail as usize].tag(&Lazy::reverse());
    push_down(arena, tail);
    (merge_concat(arena, Some(pivot), Some(tail)), true)
}

/// The last of the `beats` leading tail elements that may replace the
/// pivot, or `None` when there are none.
fn swap_partner<T: Element>(arena: &mut [SeqNode<T>], tail: u32, beats: usize) -> Option<u32> {
    let rank = beats.checked_sub(1)?;
    search_by_rank(arena, Some(tail), rank).ok()
}
