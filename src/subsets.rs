//! Lexicographic enumeration of k-element subsets of `1..=n`.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::error::SubsetError;
use crate::sync::Lazy;

/// All 21 five-element subsets of `1..=7`, in lexicographic order.
///
/// Computed on first use and shared read-only afterwards. Indices are
/// 1-based, matching [`generate`].
pub static FIVE_OF_SEVEN: Lazy<Vec<[usize; 5]>> = Lazy::new(|| {
    Subsets::start(7, 5)
        .map(|s| [s[0], s[1], s[2], s[3], s[4]])
        .collect()
});

/// Iterator over the k-element subsets of `1..=n` in lexicographic order.
///
/// Each item is a strictly increasing sequence of `k` indices. The iterator
/// ends after `{n-k+1, ..., n}`; it is empty when `k` is 0.
///
/// [`Subsets::next_subset`] walks the same sequence without allocating.
#[derive(Debug, Clone)]
pub struct Subsets {
    n: usize,
    current: Vec<usize>,
    /// `current` has not been handed out yet.
    pending: bool,
    exhausted: bool,
}

impl Subsets {
    /// Creates the iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is greater than `n` (and not zero).
    pub fn new(n: usize, k: usize) -> Result<Self, SubsetError> {
        if k > 0 && k > n {
            return Err(SubsetError::TooLarge { n, k });
        }
        Ok(Self::start(n, k))
    }

    /// Creates the iterator positioned at the subset with zero-based
    /// lexicographic index `rank`.
    ///
    /// A rank at or past C(n, k) yields an empty iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` is greater than `n` (and not zero).
    ///
    /// # Example
    ///
    /// ```
    /// use eqrs::Subsets;
    ///
    /// let mut subsets = Subsets::from_rank(5, 2, 4).unwrap();
    /// assert_eq!(subsets.next(), Some(vec![2, 3]));
    /// ```
    pub fn from_rank(n: usize, k: usize, mut rank: u64) -> Result<Self, SubsetError> {
        let mut subsets = Self::new(n, k)?;
        if rank >= binomial(n, k) {
            subsets.pending = false;
            subsets.exhausted = true;
            return Ok(subsets);
        }

        let mut value = 0;
        for i in 0..k {
            value += 1;
            // skip every block of subsets that holds `value` at position i
            loop {
                let block = binomial(n - value, k - i - 1);
                if rank < block {
                    break;
                }
                rank -= block;
                value += 1;
            }
            subsets.current[i] = value;
        }
        Ok(subsets)
    }

    fn start(n: usize, k: usize) -> Self {
        Self {
            n,
            current: (1..=k).collect(),
            pending: k > 0,
            exhausted: k == 0,
        }
    }

    /// Returns the next subset, borrowed from the iterator.
    pub fn next_subset(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if self.pending {
            self.pending = false;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }
        Some(&self.current)
    }

    /// Moves `current` to its lexicographic successor.
    ///
    /// Returns `false` when `current` was the last subset.
    fn advance(&mut self) -> bool {
        let k = self.current.len();
        // position i may hold at most n - k + i + 1 (0-based i)
        let Some(i) = (0..k)
            .rev()
            .find(|&i| self.current[i] < self.n - k + i + 1)
        else {
            return false;
        };

        self.current[i] += 1;
        for j in i + 1..k {
            self.current[j] = self.current[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_subset().map(<[usize]>::to_vec)
    }
}

/// Generates k-element subsets of `1..=n` in lexicographic order.
///
/// With `limit` set to `None` every one of the C(n, k) subsets is returned.
/// With a limit, at most that many are returned; generation still stops
/// early once the subsets run out. Choosing zero elements yields no subsets.
///
/// # Errors
///
/// Returns an error if `k` is greater than `n` (and not zero).
///
/// # Example
///
/// ```
/// use eqrs::subsets::generate;
///
/// let pairs = generate(4, 2, None).unwrap();
/// assert_eq!(
///     pairs,
///     vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4], vec![3, 4]]
/// );
/// assert!(generate(4, 0, None).unwrap().is_empty());
/// ```
pub fn generate(
    n: usize,
    k: usize,
    limit: Option<NonZeroUsize>,
) -> Result<Vec<Vec<usize>>, SubsetError> {
    let subsets = Subsets::new(n, k)?;
    Ok(match limit {
        Some(limit) => subsets.take(limit.get()).collect(),
        None => subsets.collect(),
    })
}

/// Returns the binomial coefficient C(n, k).
///
/// Saturates at `u64::MAX` instead of overflowing.
#[must_use]
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    (0..k).fold(1u64, |acc, i| {
        // exact at every step: acc * (n - i) is divisible by i + 1
        acc.saturating_mul(n - i) / (i + 1)
    })
}
