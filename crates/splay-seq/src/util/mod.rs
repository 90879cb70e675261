//! Arena link helpers, debug printing and structural validation.

pub mod print;
pub mod validate;

use crate::types::Node;

pub use print::print;
pub use validate::assert_splay_seq;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Makes `child` the left (`left == true`) or right child of `parent`,
/// keeping the back-reference in sync.
#[inline]
pub(crate) fn attach<N: Node>(arena: &mut [N], parent: u32, child: Option<u32>, left: bool) {
    if left {
        set_l(arena, parent, child);
    } else {
        set_r(arena, parent, child);
    }
    if let Some(c) = child {
        set_p(arena, c, Some(parent));
    }
}

/// Detaches and returns the left or right child of `parent`.
#[inline]
pub(crate) fn detach<N: Node>(arena: &mut [N], parent: u32, left: bool) -> Option<u32> {
    let child = if left {
        get_l(arena, parent)
    } else {
        get_r(arena, parent)
    };
    if let Some(c) = child {
        set_p(arena, c, None);
        if left {
            set_l(arena, parent, None);
        } else {
            set_r(arena, parent, None);
        }
    }
    child
}

/// Number of nodes under `root`, counted by walking the links.
pub fn count<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut stack: Vec<u32> = root.into_iter().collect();
    let mut n = 0;
    while let Some(i) = stack.pop() {
        n += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    n
}
