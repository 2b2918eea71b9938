//! Balanced static partitioning of independent work units

use std::ops;

/// Half-open interval `[begin, end)` of work unit indices
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    begin: usize,
    end: usize,
}

impl Range {
    /// Create a range; `begin <= end`
    #[inline]
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end);
        Self { begin, end }
    }

    /// First index in the range
    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// One past the last index
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of indices
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Returns true if the range is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Iterate the indices of the range
    #[inline]
    pub fn iter(&self) -> ops::Range<usize> {
        self.begin..self.end
    }
}

impl IntoIterator for Range {
    type Item = usize;
    type IntoIter = ops::Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Splits `total` units into `parts` contiguous ranges of near-equal size.
///
/// The first `total % parts` ranges get one extra unit:
///
/// ```text
/// total = 10, parts = 4  ->  [0,3) [3,6) [6,8) [8,10)
/// ```
#[derive(Copy, Clone, Debug)]
pub struct BalancedSplitter {
    parts: usize,
    base: usize,
    remainder: usize,
}

impl BalancedSplitter {
    /// Create a splitter; `parts` must be at least 1.
    pub fn new(total: usize, parts: usize) -> Self {
        debug_assert!(parts >= 1, "BalancedSplitter needs at least one part");
        Self {
            parts,
            base: total / parts,
            remainder: total % parts,
        }
    }

    /// Number of ranges
    #[inline]
    pub fn parts(&self) -> usize {
        self.parts
    }

    /// The `i`-th range, `i < parts`
    pub fn at(&self, i: usize) -> Range {
        debug_assert!(i < self.parts);
        let begin = i * self.base + i.min(self.remainder);
        let len = self.base + usize::from(i < self.remainder);
        Range::new(begin, begin + len)
    }

    /// All ranges in increasing order
    pub fn ranges(&self) -> impl Iterator<Item = Range> + '_ {
        (0..self.parts).map(move |i| self.at(i))
    }
}
