//! Split by rank and merge by concatenation.
//!
//! Both are total: they never fail on a well-formed tree.

use crate::lazy::pull_up;
use crate::node::SeqNode;
use crate::types::Element;
use crate::util::{attach, detach};

use super::{last, search_by_rank, size_of, splay};

/// Splits the tree under `root` into `[0, k)` and `[k, size)`.
///
/// `k >= size` yields the whole tree on the left.
pub fn split_at<T: Element>(
    arena: &mut [SeqNode<T>],
    root: Option<u32>,
    k: usize,
) -> (Option<u32>, Option<u32>) {
    let Some(root) = root else {
        return (None, None);
    };
    if k == 0 {
        return (None, Some(root));
    }
    if k >= size_of(arena, Some(root)) {
        return (Some(root), None);
    }
    let Ok(s) = search_by_rank(arena, Some(root), k - 1) else {
        return (Some(root), None);
    };
    let s = splay(arena, s);
    let right = detach(arena, s, false);
    pull_up(arena, s);
    (Some(s), right)
}

/// Concatenates two trees: every element of `left` precedes every element
/// of `right`.
pub fn merge_concat<T: Element>(
    arena: &mut [SeqNode<T>],
    left: Option<u32>,
    right: Option<u32>,
) -> Option<u32> {
    match (left, right) {
        (None, r) => r,
        (l, None) => l,
        (Some(l), Some(r)) => {
            let x = last(arena, l);
            let x = splay(arena, x);
            attach(arena, x, Some(r), false);
            pull_up(arena, x);
            Some(x)
        }
    }
}

/// Splits into `[0, start)`, `[start, end)` and `[end, size)`.
pub fn split_range<T: Element>(
    arena: &mut [SeqNode<T>],
    root: Option<u32>,
    start: usize,
    end: usize,
) -> (Option<u32>, Option<u32>, Option<u32>) {
    let (head, rest) = split_at(arena, root, start);
    let (mid, tail) = split_at(arena, rest, end.saturating_sub(start));
    (head, mid, tail)
}

/// Inverse of [`split_range`].
pub fn merge_range<T: Element>(
    arena: &mut [SeqNode<T>],
    head: Option<u32>,
    mid: Option<u32>,
    tail: Option<u32>,
) -> Option<u32> {
    let root = merge_concat(arena, head, mid);
    merge_concat(arena, root, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::Iter;
    use crate::util::assert_splay_seq;

    fn singletons(n: i64) -> (Vec<SeqNode<i64>>, Option<u32>) {
        let mut arena: Vec<SeqNode<i64>> = (0..n).map(|v| SeqNode::new(v * 10)).collect();
        let mut root = None;
        for i in 0..n as u32 {
            root = merge_concat(&mut arena, root, Some(i));
        }
        (arena, root)
    }

    fn values(arena: &[SeqNode<i64>], root: Option<u32>) -> Vec<i64> {
        Iter::new(arena, root).collect()
    }

    #[test]
    fn merge_builds_in_order() {
        let (arena, root) = singletons(8);
        assert_eq!(values(&arena, root), vec![0, 10, 20, 30, 40, 50, 60, 70]);
        assert_splay_seq(&arena, root).unwrap();
    }

    #[test]
    fn split_then_merge_is_identity() {
        for k in 0..=8 {
            let (mut arena, root) = singletons(8);
            let (l, r) = split_at(&mut arena, root, k);
            assert_eq!(size_of(&arena, l), k);
            assert_eq!(size_of(&arena, r), 8 - k);
            assert_splay_seq(&arena, l).unwrap();
            assert_splay_seq(&arena, r).unwrap();
            let root = merge_concat(&mut arena, l, r);
            assert_eq!(values(&arena, root), vec![0, 10, 20, 30, 40, 50, 60, 70]);
            assert_splay_seq(&arena, root).unwrap();
        }
    }

    #[test]
    fn split_past_end_keeps_everything_left() {
        let (mut arena, root) = singletons(3);
        let (l, r) = split_at(&mut arena, root, 10);
        assert_eq!(l, root);
        assert_eq!(r, None);
        assert_eq!(split_at(&mut arena, None, 2), (None, None));
    }

    #[test]
    fn split_range_middle() {
        let (mut arena, root) = singletons(6);
        let (a, m, c) = split_range(&mut arena, root, 2, 5);
        assert_eq!(values(&arena, a), vec![0, 10]);
        assert_eq!(values(&arena, m), vec![20, 30, 40]);
        assert_eq!(values(&arena, c), vec![50]);
        let root = merge_range(&mut arena, a, m, c);
        assert_eq!(values(&arena, root), vec![0, 10, 20, 30, 40, 50]);
    }
}
