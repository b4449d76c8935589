//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! # Scan direction
//!
//! Matching is greedy: each cluster of the scanned sequence claims the first
//! unclaimed equal cluster (lowest position) inside the window of the other.
//! The shorter sequence is always the one scanned; for sequences of equal
//! length the first argument is scanned. Which duplicate gets claimed on a tie
//! follows from this order.

use super::normalize::Graphemes;
use super::Similarity;
use crate::options::ComparisonOptions;
use smallvec::SmallVec;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*w) where w is the match window
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro {
    /// Compare after Unicode case folding
    pub ignore_case: bool,
}

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro(
            &Graphemes::new(a, self.ignore_case),
            &Graphemes::new(b, self.ignore_case),
        )
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Jaro-Winkler similarity calculator
///
/// Extends Jaro similarity by giving extra weight to common prefixes.
/// Best for names and short identifiers.
///
/// # Parameters
/// - `prefix_scaling_factor`: How much to boost prefix matches (typically 0.1)
/// - `max_prefix_length`: Maximum prefix length to consider (typically 4)
/// - `prefix_bonus_threshold`: Jaro score required before any boost (typically 0.7)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JaroWinkler {
    pub options: ComparisonOptions,
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a full option bundle
    #[must_use]
    pub fn from_options(options: ComparisonOptions) -> Self {
        if options.bonus_may_overflow() {
            tracing::warn!(
                prefix_scaling_factor = options.prefix_scaling_factor,
                max_prefix_length = options.max_prefix_length,
                "prefix bonus can exceed 1.0, scores will be clamped"
            );
        }
        Self { options }
    }

    #[must_use]
    pub fn with_prefix_scaling_factor(self, factor: f64) -> Self {
        Self::from_options(self.options.with_prefix_scaling_factor(factor))
    }

    #[must_use]
    pub fn with_max_prefix_length(self, length: usize) -> Self {
        Self::from_options(self.options.with_max_prefix_length(length))
    }

    #[must_use]
    pub fn with_prefix_bonus_threshold(mut self, threshold: f64) -> Self {
        self.options.prefix_bonus_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.options.ignore_case = ignore_case;
        self
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let ignore_case = self.options.ignore_case;
        jaro_winkler(
            &Graphemes::new(a, ignore_case),
            &Graphemes::new(b, ignore_case),
            &self.options,
        )
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

// ============================================================================
// Engines
// ============================================================================

/// Jaro similarity of two sequences, in [0.0, 1.0].
///
/// Two empty sequences are identical (1.0); one empty side scores 0.0.
#[must_use]
pub fn jaro<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (short, long) = if b.len() < a.len() { (b, a) } else { (a, b) };
    jaro_scan(short, long)
}

/// Greedy windowed matching of `a` against `b` plus transposition counting
fn jaro_scan<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    // Match window
    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    for (i, item) in a.iter().enumerate() {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || *item != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both matched subsequences in order and count disagreements
    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(x, _)| x);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(x, _)| x);
    let disagreements = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();
    let transpositions = (disagreements / 2) as f64;

    let m = matches as f64;
    (m / a_len as f64 + m / b_len as f64 + (m - transpositions) / m) / 3.0
}

/// Jaro-Winkler similarity of two normalized texts.
///
/// Adds `L * prefix_scaling_factor * (1 - jaro)` when the Jaro score exceeds
/// `prefix_bonus_threshold`, where `L` is the shared leading cluster run
/// capped at `max_prefix_length`. The result is clamped to [0.0, 1.0]; a
/// bonus that is not a number (e.g. an infinite factor times a zero-length
/// prefix) is dropped and the plain Jaro score returned.
#[must_use]
pub fn jaro_winkler(a: &Graphemes<'_>, b: &Graphemes<'_>, options: &ComparisonOptions) -> f64 {
    let jaro_sim = jaro(a, b);

    if jaro_sim <= options.prefix_bonus_threshold {
        return jaro_sim.clamp(0.0, 1.0);
    }

    let prefix_len = a.common_prefix_len(b, options.max_prefix_length);
    let bonus = prefix_len as f64 * options.prefix_scaling_factor * (1.0 - jaro_sim);
    if bonus.is_nan() {
        tracing::trace!(prefix_len, "prefix bonus is NaN, skipping");
        return jaro_sim;
    }

    let boosted = jaro_sim + bonus;
    if boosted > 1.0 {
        tracing::trace!(score = boosted, prefix_len, "clamping jaro-winkler score");
    }
    boosted.clamp(0.0, 1.0)
}
