//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with adjacent transpositions.
//! Particularly useful for typo detection where letter swaps are common.
//!
//! Two variants are provided:
//! - [`damerau_levenshtein`]: the unrestricted ("true") distance. A transposed
//!   pair may be edited further, tracked through the last row at which each
//!   cluster was seen.
//! - [`optimal_string_alignment`]: the restricted variant, where no substring
//!   is edited more than once.
//!
//! Example where they differ: "CA" -> "ABC" is 2 unrestricted
//! (transpose CA->AC, insert B) but 3 under OSA.

use super::normalize::{normalize_pair, Graphemes};
use super::EditDistance;
use ahash::AHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Damerau-Levenshtein distance calculator (unrestricted variant)
///
/// # Complexity
/// - Time: O(m*n) where m and n are cluster counts
/// - Space: O(m*n) for the full matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein {
    /// Compare after Unicode case folding
    pub ignore_case: bool,
}

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Compute distance with proper Option semantics.
    /// Returns `None` if either input is absent.
    #[must_use]
    pub fn compute(&self, a: Option<&str>, b: Option<&str>) -> Option<usize> {
        normalize_pair(a, b, self.ignore_case).map(|(a, b)| damerau_levenshtein(&a, &b))
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau_levenshtein(
            &Graphemes::new(a, self.ignore_case),
            &Graphemes::new(b, self.ignore_case),
        )
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Row-major matrix with a fixed column count
struct Matrix {
    cells: Vec<usize>,
    cols: usize,
}

impl Matrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }
}

/// Unrestricted Damerau-Levenshtein distance between two sequences.
///
/// # Example
/// ```
/// use strmetrics::algorithms::damerau::damerau_levenshtein;
/// use strmetrics::algorithms::normalize::Graphemes;
///
/// let a = Graphemes::new("ogogle", false);
/// let b = Graphemes::new("googel", false);
/// assert_eq!(damerau_levenshtein(&a, &b), 2);
/// ```
#[must_use]
pub fn damerau_levenshtein<T: Hash + Eq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let max_dist = m + n;

    // Last row (1-based) in which each cluster of `a` was seen
    let mut last_row: AHashMap<&T, usize> = AHashMap::new();

    // DP matrix with an extra sentinel row and column
    let mut d = Matrix::new(m + 2, n + 2);

    d.set(0, 0, max_dist);
    for i in 0..=m {
        d.set(i + 1, 0, max_dist);
        d.set(i + 1, 1, i);
    }
    for j in 0..=n {
        d.set(0, j + 1, max_dist);
        d.set(1, j + 1, j);
    }

    for i in 1..=m {
        // Last column in this row where a[i - 1] matched
        let mut last_match_col = 0usize;

        for j in 1..=n {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let value = (d.get(i, j) + cost) // substitution
                .min(d.get(i + 1, j) + 1) // insertion
                .min(d.get(i, j + 1) + 1) // deletion
                .min(d.get(i1, j1) + (i - i1 - 1) + 1 + (j - j1 - 1)); // transposition
            d.set(i + 1, j + 1, value);
        }

        last_row.insert(&a[i - 1], i);
    }

    d.get(m + 1, n + 1)
}

/// Optimal string alignment distance (restricted Damerau-Levenshtein).
///
/// Uses three rolling rows, so space is O(n).
#[must_use]
pub fn optimal_string_alignment<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + 1);
            }
        }

        // Rotate rows
        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dl(a: &str, b: &str) -> usize {
        damerau_levenshtein(&Graphemes::new(a, false), &Graphemes::new(b, false))
    }

    fn osa(a: &str, b: &str) -> usize {
        optimal_string_alignment(&Graphemes::new(a, false), &Graphemes::new(b, false))
    }

    #[test]
    fn test_damerau_basic() {
        assert_eq!(dl("", ""), 0);
        assert_eq!(dl("abc", "abc"), 0);
        assert_eq!(dl("abc", ""), 3);
        assert_eq!(dl("", "abc"), 3);
        assert_eq!(dl("ab", "ba"), 1); // transposition
        assert_eq!(dl("abc", "acb"), 1); // transposition
        assert_eq!(dl("kitten", "sitting"), 3);
    }

    #[test]
    fn test_damerau_examples() {
        assert_eq!(dl("ogogle", "googel"), 2);
        assert_eq!(dl("abcd", "acb"), 2);
    }

    #[test]
    fn test_scattered_transpositions() {
        // Three independent swaps cost one each
        assert_eq!(dl("abcdefgh", "badcfehg"), 4);
        assert_eq!(dl("abcdef", "badcfe"), 3);
    }

    #[test]
    fn test_true_vs_osa() {
        assert_eq!(dl("ca", "abc"), 2);
        assert_eq!(osa("ca", "abc"), 3);
        assert_eq!(dl("00210000", "001020000"), 2);
        assert_eq!(osa("00210000", "001020000"), 3);
    }

    #[test]
    fn test_osa_basic() {
        assert_eq!(osa("", ""), 0);
        assert_eq!(osa("abc", "abc"), 0);
        assert_eq!(osa("ab", "ba"), 1);
        assert_eq!(osa("abc", "acb"), 1);
        assert_eq!(osa("abc", ""), 3);
    }

    #[test]
    fn test_damerau_graphemes() {
        assert_eq!(dl("y\u{306}a", "ay\u{306}"), 1);
        assert_eq!(dl("অআইঈউ", "অইআঈউ"), 1);
    }

    #[test]
    fn test_struct_compute() {
        let dl = DamerauLevenshtein::new().with_ignore_case(true);
        assert_eq!(dl.compute(Some("OGOGLE"), Some("googel")), Some(2));
        assert_eq!(dl.compute(None, Some("googel")), None);
        assert_eq!(EditDistance::name(&dl), "damerau_levenshtein");
    }
}
