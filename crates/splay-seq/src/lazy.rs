//! Two-phase update discipline.
//!
//! - [`push_down`] folds a node's pending state into the node itself and
//!   hands it to the children. Required before reading or restructuring
//!   the node's children.
//! - [`pull_up`] recomputes a node's aggregate from its children. Required
//!   bottom-up after any change to a node's child set.

use crate::node::{SeqNode, Summary};
use crate::types::Element;
use crate::util::{get_l, get_p, get_r, set_p};

/// Applies `x`'s pending state to `x` and queues it on both children.
pub fn push_down<T: Element>(arena: &mut [SeqNode<T>], x: u32) {
    let node = &mut arena[x as usize];
    if node.pushed_down {
        return;
    }
    let lazy = node.lazy;
    if lazy.reverse {
        std::mem::swap(&mut node.l, &mut node.r);
    }
    node.value = lazy.apply_value(node.value);
    node.agg = node.agg.apply(&lazy);
    node.lazy = Default::default();
    node.pushed_down = true;
    let (l, r) = (node.l, node.r);
    if let Some(l) = l {
        arena[l as usize].tag(&lazy);
    }
    if let Some(r) = r {
        arena[r as usize].tag(&lazy);
    }
}

/// Recomputes `x.agg` from `x.value` and its children.
///
/// `x` itself must already be pushed down. The children are pushed here,
/// which is O(1) each, so their summaries can be read directly.
pub fn pull_up<T: Element>(arena: &mut [SeqNode<T>], x: u32) {
    debug_assert!(arena[x as usize].pushed_down, "pull_up on a node with pending state");
    let l = get_l(arena, x);
    let r = get_r(arena, x);
    let mut agg = Summary::leaf(arena[x as usize].value);
    if let Some(l) = l {
        push_down(arena, l);
        agg = Summary::concat(&arena[l as usize].agg, &agg);
    }
    if let Some(r) = r {
        push_down(arena, r);
        agg = Summary::concat(&agg, &arena[r as usize].agg);
    }
    let node = &mut arena[x as usize];
    node.agg = agg;
    node.up_to_date = true;
    let parent = node.p;
    if let Some(p) = parent {
        arena[p as usize].up_to_date = false;
    }
}

/// Pushes down every ancestor of `x` from the root toward `x`, then `x`.
///
/// Runs without allocating: the upward walk points each `p` link at the
/// child on the path, and the downward walk follows those links while
/// restoring them. [`push_down`] never reads `p`.
pub fn push_path<T: Element>(arena: &mut [SeqNode<T>], x: u32) {
    let mut below = None;
    let mut curr = x;
    while let Some(p) = get_p(arena, curr) {
        set_p(arena, curr, below);
        below = Some(curr);
        curr = p;
    }
    set_p(arena, curr, below);

    let mut above = None;
    loop {
        push_down(arena, curr);
        let next = get_p(arena, curr);
        set_p(arena, curr, above);
        match next {
            Some(n) => {
                above = Some(curr);
                curr = n;
            }
            None => return,
        }
    }
}

/// Summary of the subtree rooted at `x`, `x`'s own pending state included.
pub fn effective<T: Element>(arena: &[SeqNode<T>], x: Option<u32>) -> Option<Summary<T>> {
    x.map(|x| arena[x as usize].effective())
}
