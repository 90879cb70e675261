//! Splay engine: rotations, splay-to-root and rank descents.
//!
//! Every function takes the node arena and `u32` indices. Nodes are pushed
//! down before their children are inspected and pulled up after their
//! child set changes, so a tree handed back to the caller never carries
//! stale aggregates.

pub mod split;

use crate::error::{Result, SeqError};
use crate::lazy::{pull_up, push_down, push_path};
use crate::node::SeqNode;
use crate::types::Element;
use crate::util::{attach, get_l, get_p, get_r, set_l, set_p, set_r};

pub use split::{merge_concat, split_at};

/// Subtree size under `x`, or 0. Pending state never changes sizes, so
/// this is valid whether or not `x` has been pushed.
#[inline]
pub fn size_of<T>(arena: &[SeqNode<T>], x: Option<u32>) -> usize {
    x.map_or(0, |x| arena[x as usize].agg.size)
}

/// Promotes `x` above its parent with a single rotation. The rotation
/// direction follows from which side of the parent `x` hangs on:
///
/// ```text
///     p            x
///    / \          / \
///   x   c   →    a   p
///  / \              / \
/// a   b            b   c
/// ```
///
/// No-op when `x` is a root.
pub fn rotate<T: Element>(arena: &mut [SeqNode<T>], x: u32) {
    let Some(p) = get_p(arena, x) else {
        return;
    };
    push_down(arena, p);
    push_down(arena, x);
    let g = get_p(arena, p);
    if get_l(arena, p) == Some(x) {
        let b = get_r(arena, x);
        attach(arena, p, b, true);
        attach(arena, x, Some(p), false);
    } else {
        let b = get_l(arena, x);
        attach(arena, p, b, false);
        attach(arena, x, Some(p), true);
    }
    set_p(arena, x, g);
    if let Some(g) = g {
        if get_l(arena, g) == Some(p) {
            set_l(arena, g, Some(x));
        } else {
            set_r(arena, g, Some(x));
        }
    }
    pull_up(arena, p);
    pull_up(arena, x);
}

/// Raises `x` to the root of its tree with zig / zig-zig / zig-zag steps
/// and returns it. Afterwards `x`'s summary covers the whole tree.
pub fn splay<T: Element>(arena: &mut [SeqNode<T>], x: u32) -> u32 {
    push_path(arena, x);
    while let Some(p) = get_p(arena, x) {
        match get_p(arena, p) {
            None => rotate(arena, x),
            Some(g) => {
                let zig_zig = (get_l(arena, g) == Some(p)) == (get_l(arena, p) == Some(x));
                if zig_zig {
                    rotate(arena, p);
                } else {
                    rotate(arena, x);
                }
                rotate(arena, x);
            }
        }
    }
    if !arena[x as usize].up_to_date {
        pull_up(arena, x);
    }
    x
}

/// Leftmost node, pushing down every node on the way.
pub fn first<T: Element>(arena: &mut [SeqNode<T>], root: u32) -> u32 {
    let mut x = root;
    loop {
        push_down(arena, x);
        match get_l(arena, x) {
            Some(l) => x = l,
            None => return x,
        }
    }
}

/// Rightmost node, pushing down every node on the way.
pub fn last<T: Element>(arena: &mut [SeqNode<T>], root: u32) -> u32 {
    let mut x = root;
    loop {
        push_down(arena, x);
        match get_r(arena, x) {
            Some(r) => x = r,
            None => return x,
        }
    }
}

/// Node with in-order rank `k` (0-based) under `root`. Does not splay.
pub fn search_by_rank<T: Element>(arena: &mut [SeqNode<T>], root: Option<u32>, k: usize) -> Result<u32> {
    let len = size_of(arena, root);
    if k >= len {
        return Err(SeqError::IndexOutOfRange {
            start: k,
            end: k.saturating_add(1),
            len,
        });
    }
    let mut rank = k;
    let mut curr = root;
    while let Some(x) = curr {
        push_down(arena, x);
        let left = get_l(arena, x);
        let left_size = size_of(arena, left);
        match rank.cmp(&left_size) {
            std::cmp::Ordering::Less => curr = left,
            std::cmp::Ordering::Equal => return Ok(x),
            std::cmp::Ordering::Greater => {
                rank -= left_size + 1;
                curr = get_r(arena, x);
            }
        }
    }
    Err(SeqError::IndexOutOfRange {
        start: k,
        end: k.saturating_add(1),
        len,
    })
}

/// Number of leading in-order elements satisfying `pred`, which must be
/// true on a prefix of the sequence and false afterwards.
///
/// The deepest visited node is splayed, so the second return value is the
/// new root.
pub fn partition_point<T, F>(arena: &mut [SeqNode<T>], root: u32, pred: F) -> (usize, u32)
where
    T: Element,
    F: Fn(T) -> bool,
{
    let mut count = 0;
    let mut deepest = root;
    let mut curr = Some(root);
    while let Some(x) = curr {
        push_down(arena, x);
        deepest = x;
        if pred(arena[x as usize].value) {
            count += size_of(arena, get_l(arena, x)) + 1;
            curr = get_r(arena, x);
        } else {
            curr = get_l(arena, x);
        }
    }
    (count, splay(arena, deepest))
}
