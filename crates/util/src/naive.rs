//! Brute-force reference sequence.
//!
//! Every operation is a plain `Vec` manipulation, O(n) or worse. Used as
//! the oracle in differential tests.

use std::ops::Add;

use crate::fuzzer::Op;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NaiveSeq<T> {
    pub values: Vec<T>,
}

/// Result of applying an [`Op`] to a sequence, for comparing two
/// implementations step by step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Unit,
    Value(T),
    Stepped(bool),
}

impl<T> NaiveSeq<T>
where
    T: Copy + Ord + Default + Add<Output = T>,
{
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn insert_at(&mut self, k: usize, value: T) {
        self.values.insert(k, value);
    }

    pub fn erase_at(&mut self, k: usize) -> T {
        self.values.remove(k)
    }

    pub fn get(&self, k: usize) -> T {
        self.values[k]
    }

    pub fn range_sum(&self, start: usize, end: usize) -> T {
        self.values[start..end]
            .iter()
            .fold(T::default(), |acc, &v| acc + v)
    }

    pub fn range_assign(&mut self, start: usize, end: usize, value: T) {
        self.values[start..end].fill(value);
    }

    pub fn range_add(&mut self, start: usize, end: usize, delta: T) {
        for v in &mut self.values[start..end] {
            *v = *v + delta;
        }
    }

    pub fn reverse_range(&mut self, start: usize, end: usize) {
        self.values[start..end].reverse();
    }

    pub fn next_permutation_in_range(&mut self, start: usize, end: usize) -> bool {
        next_permutation(&mut self.values[start..end])
    }

    pub fn prev_permutation_in_range(&mut self, start: usize, end: usize) -> bool {
        prev_permutation(&mut self.values[start..end])
    }
}

impl NaiveSeq<i64> {
    /// Applies `op`, which must be valid for the current length.
    pub fn apply(&mut self, op: Op) -> Outcome<i64> {
        match op {
            Op::InsertAt(k, v) => {
                self.insert_at(k, v);
                Outcome::Unit
            }
            Op::EraseAt(k) => Outcome::Value(self.erase_at(k)),
            Op::Get(k) => Outcome::Value(self.get(k)),
            Op::RangeSum(s, e) => Outcome::Value(self.range_sum(s, e)),
            Op::RangeAssign(s, e, v) => {
                self.range_assign(s, e, v);
                Outcome::Unit
            }
            Op::RangeAdd(s, e, v) => {
                self.range_add(s, e, v);
                Outcome::Unit
            }
            Op::Reverse(s, e) => {
                self.reverse_range(s, e);
                Outcome::Unit
            }
            Op::NextPermutation(s, e) => Outcome::Stepped(self.next_permutation_in_range(s, e)),
            Op::PrevPermutation(s, e) => Outcome::Stepped(self.prev_permutation_in_range(s, e)),
        }
    }
}

impl<T> From<Vec<T>> for NaiveSeq<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

/// Classic in-place next permutation. Returns `false` and leaves the
/// slice sorted ascending when it was the last permutation.
pub fn next_permutation<T: Ord>(a: &mut [T]) -> bool {
    step(a, |x, y| x < y)
}

/// Classic in-place previous permutation. Returns `false` and leaves the
/// slice sorted descending when it was the first permutation.
pub fn prev_permutation<T: Ord>(a: &mut [T]) -> bool {
    step(a, |x, y| x > y)
}

fn step<T: Ord>(a: &mut [T], before: impl Fn(&T, &T) -> bool) -> bool {
    if a.len() < 2 {
        return false;
    }
    let mut i = a.len() - 1;
    while i > 0 && !before(&a[i - 1], &a[i]) {
        i -= 1;
    }
    if i == 0 {
        a.reverse();
        return false;
    }
    let pivot = i - 1;
    let mut j = a.len() - 1;
    while !before(&a[pivot], &a[j]) {
        j -= 1;
    }
    a.swap(pivot, j);
    a[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_permutation_cycles() {
        let mut a = vec![1, 2, 3];
        let mut seen = vec![a.clone()];
        while next_permutation(&mut a) {
            seen.push(a.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        assert_eq!(a, vec![1, 2, 3]);
    }

    #[test]
    fn prev_permutation_undoes_next() {
        let mut a = vec![2, 5, 5, 1, 3];
        let original = a.clone();
        assert!(next_permutation(&mut a));
        assert_eq!(a, vec![2, 5, 5, 3, 1]);
        assert!(prev_permutation(&mut a));
        assert_eq!(a, original);
    }

    #[test]
    fn duplicates_cycle_distinct_arrangements() {
        let mut a = vec![1, 1, 2];
        let mut count = 1;
        while next_permutation(&mut a) {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn apply_ops() {
        let mut seq: NaiveSeq<i64> = vec![3, 1, 4, 1, 5].into();
        assert_eq!(seq.apply(Op::InsertAt(2, 9)), Outcome::Unit);
        assert_eq!(seq.apply(Op::RangeAdd(1, 4, 10)), Outcome::Unit);
        assert_eq!(seq.values, vec![3, 11, 19, 14, 1, 5]);
        assert_eq!(seq.apply(Op::RangeSum(0, 6)), Outcome::Value(53));
        assert_eq!(seq.apply(Op::EraseAt(0)), Outcome::Value(3));
        assert_eq!(seq.apply(Op::Reverse(0, 3)), Outcome::Unit);
        assert_eq!(seq.values, vec![14, 19, 11, 1, 5]);
        assert_eq!(seq.apply(Op::PrevPermutation(3, 5)), Outcome::Stepped(false));
        assert_eq!(seq.values, vec![14, 19, 11, 5, 1]);
    }
}
