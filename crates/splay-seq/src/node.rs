//! Tree vertex, cached subtree aggregates and pending lazy state.

use crate::types::{Element, Node};

/// Aggregate of a contiguous in-order run of elements.
///
/// `prefix_inc` is the length of the longest non-decreasing run at the
/// front, `suffix_dec` the longest non-increasing run at the back, and so
/// on. `first` and `last` are the boundary elements, cached so that two
/// summaries can be concatenated without walking to the extreme nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary<T> {
    pub size: usize,
    pub sum: T,
    pub first: T,
    pub last: T,
    pub prefix_inc: usize,
    pub prefix_dec: usize,
    pub suffix_inc: usize,
    pub suffix_dec: usize,
}

impl<T: Element> Summary<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            size: 1,
            sum: value,
            first: value,
            last: value,
            prefix_inc: 1,
            prefix_dec: 1,
            suffix_inc: 1,
            suffix_dec: 1,
        }
    }

    /// Summary of `a` followed by `b`.
    pub fn concat(a: &Self, b: &Self) -> Self {
        let inc = a.last <= b.first;
        let dec = a.last >= b.first;
        Self {
            size: a.size + b.size,
            sum: a.sum.add(b.sum),
            first: a.first,
            last: b.last,
            prefix_inc: if inc && a.prefix_inc == a.size {
                a.size + b.prefix_inc
            } else {
                a.prefix_inc
            },
            prefix_dec: if dec && a.prefix_dec == a.size {
                a.size + b.prefix_dec
            } else {
                a.prefix_dec
            },
            suffix_inc: if inc && b.suffix_inc == b.size {
                b.size + a.suffix_inc
            } else {
                b.suffix_inc
            },
            suffix_dec: if dec && b.suffix_dec == b.size {
                b.size + a.suffix_dec
            } else {
                b.suffix_dec
            },
        }
    }

    /// Summary of the same run read back to front.
    ///
    /// A non-decreasing tail read backwards is a non-increasing head.
    pub fn reversed(&self) -> Self {
        Self {
            first: self.last,
            last: self.first,
            prefix_inc: self.suffix_dec,
            prefix_dec: self.suffix_inc,
            suffix_inc: self.prefix_dec,
            suffix_dec: self.prefix_inc,
            ..*self
        }
    }

    /// Summary after every element became `x`.
    pub fn assigned(&self, x: T) -> Self {
        Self {
            size: self.size,
            sum: x.times(self.size),
            first: x,
            last: x,
            prefix_inc: self.size,
            prefix_dec: self.size,
            suffix_inc: self.size,
            suffix_dec: self.size,
        }
    }

    /// Summary after `d` was added to every element. Run lengths are
    /// translation invariant.
    pub fn shifted(&self, d: T) -> Self {
        Self {
            sum: self.sum.add(d.times(self.size)),
            first: self.first.add(d),
            last: self.last.add(d),
            ..*self
        }
    }

    pub fn apply(&self, lazy: &Lazy<T>) -> Self {
        let mut out = *self;
        if lazy.reverse {
            out = out.reversed();
        }
        if let Some(x) = lazy.assign {
            out = out.assigned(x);
        }
        if !lazy.add.is_zero() {
            out = out.shifted(lazy.add);
        }
        out
    }
}

/// Pending update for a whole subtree: reverse the order, then assign
/// (when present), then add.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lazy<T> {
    pub assign: Option<T>,
    pub add: T,
    pub reverse: bool,
}

impl<T: Element> Default for Lazy<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Element> Lazy<T> {
    pub fn identity() -> Self {
        Self {
            assign: None,
            add: T::default(),
            reverse: false,
        }
    }

    pub fn assign(x: T) -> Self {
        Self {
            assign: Some(x),
            ..Self::identity()
        }
    }

    pub fn add(d: T) -> Self {
        Self {
            add: d,
            ..Self::identity()
        }
    }

    pub fn reverse() -> Self {
        Self {
            reverse: true,
            ..Self::identity()
        }
    }

    pub fn is_identity(&self) -> bool {
        self.assign.is_none() && self.add.is_zero() && !self.reverse
    }

    /// `self` followed by `outer`. An outer assignment discards whatever
    /// additive delta `self` carried.
    pub fn then(&self, outer: &Self) -> Self {
        let reverse = self.reverse != outer.reverse;
        match outer.assign {
            Some(x) => Self {
                assign: Some(x),
                add: outer.add,
                reverse,
            },
            None => Self {
                assign: self.assign,
                add: self.add.add(outer.add),
                reverse,
            },
        }
    }

    pub fn apply_value(&self, value: T) -> T {
        self.assign.unwrap_or(value).add(self.add)
    }
}

/// Sequence tree vertex.
///
/// `value` and `agg` exclude this node's own `lazy` state: they become
/// authoritative once [`push_down`](crate::lazy::push_down) folds it in.
#[derive(Clone, Debug)]
pub struct SeqNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: T,
    pub agg: Summary<T>,
    pub lazy: Lazy<T>,
    /// `agg` is consistent with the current children.
    pub up_to_date: bool,
    /// `lazy` is the identity.
    pub pushed_down: bool,
}

impl<T: Element> SeqNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
            agg: Summary::leaf(value),
            lazy: Lazy::identity(),
            up_to_date: true,
            pushed_down: true,
        }
    }

    /// Queues `lazy` on top of whatever is already pending here.
    pub fn tag(&mut self, lazy: &Lazy<T>) {
        if lazy.is_identity() {
            return;
        }
        self.lazy = self.lazy.then(lazy);
        // Two reversals, or opposite deltas, cancel out.
        self.pushed_down = self.lazy.is_identity();
    }

    /// Subtree summary with this node's own pending state applied.
    pub fn effective(&self) -> Summary<T> {
        if self.pushed_down {
            self.agg
        } else {
            self.agg.apply(&self.lazy)
        }
    }
}

impl<T> Node for SeqNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
