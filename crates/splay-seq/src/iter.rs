//! In-order iteration over effective values.
//!
//! The iterator never mutates the tree: pending state is composed on the
//! way down instead of being pushed into the nodes.

use std::iter::FusedIterator;

use crate::node::{Lazy, SeqNode};
use crate::types::Element;

enum Frame<T> {
    Expand(u32, Lazy<T>),
    Emit(T),
}

pub struct Iter<'a, T> {
    arena: &'a [SeqNode<T>],
    stack: Vec<Frame<T>>,
    remaining: usize,
}

impl<'a, T: Element> Iter<'a, T> {
    pub(crate) fn new(arena: &'a [SeqNode<T>], root: Option<u32>) -> Self {
        let remaining = root.map_or(0, |r| arena[r as usize].agg.size);
        let stack = root
            .map(|r| Frame::Expand(r, Lazy::identity()))
            .into_iter()
            .collect();
        Self {
            arena,
            stack,
            remaining,
        }
    }
}

impl<T: Element> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
                Frame::Expand(x, outer) => {
                    let node = &self.arena[x as usize];
                    let lazy = if node.pushed_down {
                        outer
                    } else {
                        node.lazy.then(&outer)
                    };
                    let (first, second) = if lazy.reverse {
                        (node.r, node.l)
                    } else {
                        (node.l, node.r)
                    };
                    if let Some(c) = second {
                        self.stack.push(Frame::Expand(c, lazy));
                    }
                    self.stack.push(Frame::Emit(lazy.apply_value(node.value)));
                    if let Some(c) = first {
                        self.stack.push(Frame::Expand(c, lazy));
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Element> ExactSizeIterator for Iter<'_, T> {}

impl<T: Element> FusedIterator for Iter<'_, T> {}
