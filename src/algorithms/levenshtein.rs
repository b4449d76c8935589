//! Levenshtein (edit) distance implementation
//!
//! Unit-cost insertion, deletion and substitution over grapheme clusters,
//! computed with a single-row dynamic program.

use super::normalize::{normalize_pair, Graphemes};
use super::EditDistance;
use smallvec::SmallVec;

/// Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are cluster counts
/// - Space: O(min(m,n)) using single-row DP optimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Compare after Unicode case folding
    pub ignore_case: bool,
}

impl Levenshtein {
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
        normalize_pair(a, b, self.ignore_case).map(|(a, b)| levenshtein(&a, &b))
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(
            &Graphemes::new(a, self.ignore_case),
            &Graphemes::new(b, self.ignore_case),
        )
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance between two sequences.
///
/// # Example
/// ```
/// use strmetrics::algorithms::levenshtein::levenshtein;
/// use strmetrics::algorithms::normalize::Graphemes;
///
/// let a = Graphemes::new("kitten", false);
/// let b = Graphemes::new("sitting", false);
/// assert_eq!(levenshtein(&a, &b), 3);
/// ```
#[must_use]
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Ensure shorter sequence is on the column axis
    let (target, source) = if m < n { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for (j, tc) in target.iter().enumerate() {
            let cost = usize::from(sc != tc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}
