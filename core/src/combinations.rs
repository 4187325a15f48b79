//! Enumeration of k-subsets of `0..n` in lexicographic order.
//!
//! Lexicographic order is the order a depth-first "pick the next larger
//! index" recursion would visit subsets in, and the search's tie-break
//! depends on it.

/// Iterator over strictly increasing index vectors `i_1 < ... < i_k`.
///
/// ```
/// use recovery_core::combinations::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// assert_eq!(all.len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            k,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    /// Move `indices` to the next combination, returning `false` once the
    /// last one (`n-k, ..., n-1`) has been passed.
    fn advance(&mut self) -> bool {
        let (n, k) = (self.n, self.k);
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i)
        else {
            return false;
        };

        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.done = !self.advance();
        Some(current)
    }
}

/// `C(n, k)`, or `None` if it does not fit in a `u128`.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    (0..k).try_fold(1u128, |acc, i| {
        // acc * (n - i) is always divisible by (i + 1) here
        acc.checked_mul(n - i).map(|product| product / (i + 1))
    })
}
