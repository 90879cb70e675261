use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// One sequence operation, as generated by [`Fuzzer::random_op`].
///
/// Ranges are half-open `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    InsertAt(usize, i64),
    EraseAt(usize),
    Get(usize),
    RangeSum(usize, usize),
    RangeAssign(usize, usize, i64),
    RangeAdd(usize, usize, i64),
    Reverse(usize, usize),
    NextPermutation(usize, usize),
    PrevPermutation(usize, usize),
}

/// A fuzzer for generating random sequence workloads.
///
/// Uses the xoshiro256** PRNG for reproducible runs when seeded.
///
/// # Examples
///
/// ```
/// use splay_seq_util::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::from_u64(7);
/// let n = fuzzer.random_int(1, 10);
/// assert!((1..=10).contains(&n));
///
/// let (start, end) = fuzzer.random_range(5);
/// assert!(start <= end && end <= 5);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    /// Inclusive bounds for generated element values.
    pub values: (i64, i64),
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            values: (-50, 50),
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Fuzzer seeded from a single integer, convenient for seed tables.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Narrow the generated values, e.g. to force many duplicates.
    pub fn with_values(mut self, min: i64, max: i64) -> Self {
        self.values = (min, max);
        self
    }

    /// Random integer in `[min, max]` (inclusive).
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Random element value within [`Fuzzer::values`].
    pub fn random_value(&mut self) -> i64 {
        let (min, max) = self.values;
        self.random_int(min, max)
    }

    /// Random position in `[0, len)`. `len` must be non-zero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Random half-open range within `[0, len]`, possibly empty.
    pub fn random_range(&mut self, len: usize) -> (usize, usize) {
        let a = self.rng.gen_range(0..=len);
        let b = self.rng.gen_range(0..=len);
        (a.min(b), a.max(b))
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    pub fn random_values(&mut self, len: usize) -> Vec<i64> {
        (0..len).map(|_| self.random_value()).collect()
    }

    /// Random operation valid for a sequence of length `len`. Insertions
    /// are favoured while the sequence is short.
    pub fn random_op(&mut self, len: usize) -> Op {
        if len == 0 || (len < 8 && self.random_bool(0.5)) {
            let k = self.rng.gen_range(0..=len);
            return Op::InsertAt(k, self.random_value());
        }
        let (start, end) = self.random_range(len);
        match self.rng.gen_range(0..9) {
            0 => Op::InsertAt(self.rng.gen_range(0..=len), self.random_value()),
            1 => Op::EraseAt(self.random_index(len)),
            2 => Op::Get(self.random_index(len)),
            3 => Op::RangeSum(start, end),
            4 => Op::RangeAssign(start, end, self.random_value()),
            5 => Op::RangeAdd(start, end, self.random_value()),
            6 => Op::Reverse(start, end),
            7 => Op::NextPermutation(start, end),
            _ => Op::PrevPermutation(start, end),
        }
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&mut self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut(&mut Self) -> T,
    {
        (0..times).map(|_| callback(self)).collect()
    }
}
