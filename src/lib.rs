//! strmetrics - Grapheme-aware string similarity metrics
//!
//! Pairwise scoring primitives for fuzzy matching, deduplication,
//! spell-correction and record linkage.
//!
//! # Features
//! - Sørensen-Dice coefficient over grapheme bigrams
//! - Jaro and Jaro-Winkler similarity / distance
//! - Levenshtein and (unrestricted) Damerau-Levenshtein distance
//! - Extended grapheme clusters as the comparison unit, with full Unicode case folding
//! - Decoding from UTF-16, UTF-32 and legacy encodings
//!
//! # Absent input
//!
//! Every entry point takes `Option<&str>`. `None` is absent input, distinct
//! from the empty string, and is answered with a sentinel instead of an error:
//! - similarity and coefficient metrics return `0.0`
//!   (Jaro-Winkler distance too, not `1.0`)
//! - edit distances return [`UNDEFINED_DISTANCE`], which callers must check for
//!
//! ```rust
//! use strmetrics::{levenshtein_distance, sorensen_dice_coefficient, UNDEFINED_DISTANCE};
//!
//! assert_eq!(levenshtein_distance(Some("kitten"), Some("sitting"), false), 3);
//! assert_eq!(levenshtein_distance(Some("kitten"), None, false), UNDEFINED_DISTANCE);
//! assert_eq!(sorensen_dice_coefficient(None, Some("night"), false), 0.0);
//! ```

pub mod algorithms;
pub mod batch;
pub mod bytes;
pub mod error;
pub mod options;

use algorithms::normalize::normalize_pair;

// Re-exports for convenience (explicit to keep the facade names unambiguous)
pub use algorithms::encoding::{decode_text, SourceEncoding};
pub use algorithms::normalize::Graphemes;
pub use algorithms::{
    DamerauLevenshtein, EditDistance, Jaro, JaroWinkler, Levenshtein, Similarity, SorensenDice,
};
pub use batch::{best_match, score_many, Metric, Score};
pub use error::MetricsError;
pub use options::ComparisonOptions;

/// Returned by the edit distances when either input is absent.
///
/// No real distance can reach it: that would take `usize::MAX` clusters.
pub const UNDEFINED_DISTANCE: usize = usize::MAX;

/// Returned by the similarity and coefficient metrics when either input is absent
pub const UNDEFINED_SIMILARITY: f64 = 0.0;

#[inline]
fn undefined_input(metric: &'static str) {
    tracing::trace!(metric, "absent input, returning sentinel");
}

// ============================================================================
// Metric Facade
// ============================================================================

/// Sørensen-Dice coefficient over grapheme bigrams, in [0.0, 1.0].
///
/// ```rust
/// use strmetrics::sorensen_dice_coefficient;
///
/// assert_eq!(sorensen_dice_coefficient(Some("night"), Some("nacht"), false), 0.25);
/// assert_eq!(sorensen_dice_coefficient(Some("night"), Some("niGHt"), true), 1.0);
/// ```
#[must_use]
pub fn sorensen_dice_coefficient(a: Option<&str>, b: Option<&str>, ignore_case: bool) -> f64 {
    match normalize_pair(a, b, ignore_case) {
        Some((a, b)) => algorithms::sorensen_dice(&a, &b),
        None => {
            undefined_input("sorensen_dice");
            UNDEFINED_SIMILARITY
        }
    }
}

/// Jaro similarity, in [0.0, 1.0]
#[must_use]
pub fn jaro_similarity(a: Option<&str>, b: Option<&str>, ignore_case: bool) -> f64 {
    match normalize_pair(a, b, ignore_case) {
        Some((a, b)) => algorithms::jaro(&a, &b),
        None => {
            undefined_input("jaro");
            UNDEFINED_SIMILARITY
        }
    }
}

/// Jaro-Winkler similarity, in [0.0, 1.0].
///
/// ```rust
/// use strmetrics::{jaro_winkler_similarity, ComparisonOptions};
///
/// let score = jaro_winkler_similarity(Some("martha"), Some("marhta"), ComparisonOptions::default());
/// assert!((score - 0.96111).abs() < 1e-5);
/// ```
#[must_use]
pub fn jaro_winkler_similarity(a: Option<&str>, b: Option<&str>, options: ComparisonOptions) -> f64 {
    match normalize_pair(a, b, options.ignore_case) {
        Some((a, b)) => algorithms::jaro_winkler(&a, &b, &options),
        None => {
            undefined_input("jaro_winkler");
            UNDEFINED_SIMILARITY
        }
    }
}

/// Jaro-Winkler distance, `1.0 - similarity`.
///
/// Absent input gives `0.0`, the same sentinel as the similarity.
#[must_use]
pub fn jaro_winkler_distance(a: Option<&str>, b: Option<&str>, options: ComparisonOptions) -> f64 {
    match normalize_pair(a, b, options.ignore_case) {
        Some((a, b)) => 1.0 - algorithms::jaro_winkler(&a, &b, &options),
        None => {
            undefined_input("jaro_winkler_distance");
            UNDEFINED_SIMILARITY
        }
    }
}

/// Levenshtein distance in grapheme clusters, or [`UNDEFINED_DISTANCE`]
#[must_use]
pub fn levenshtein_distance(a: Option<&str>, b: Option<&str>, ignore_case: bool) -> usize {
    match normalize_pair(a, b, ignore_case) {
        Some((a, b)) => algorithms::levenshtein(&a, &b),
        None => {
            undefined_input("levenshtein");
            UNDEFINED_DISTANCE
        }
    }
}

/// Unrestricted Damerau-Levenshtein distance in grapheme clusters, or
/// [`UNDEFINED_DISTANCE`].
///
/// ```rust
/// use strmetrics::damerau_levenshtein_distance;
///
/// assert_eq!(damerau_levenshtein_distance(Some("abcd"), Some("acb"), false), 2);
/// ```
#[must_use]
pub fn damerau_levenshtein_distance(a: Option<&str>, b: Option<&str>, ignore_case: bool) -> usize {
    match normalize_pair(a, b, ignore_case) {
        Some((a, b)) => algorithms::damerau_levenshtein(&a, &b),
        None => {
            undefined_input("damerau_levenshtein");
            UNDEFINED_DISTANCE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.00001
    }

    #[test]
    fn test_sentinels() {
        let opts = ComparisonOptions::default();
        assert_eq!(sorensen_dice_coefficient(None, Some("a"), false), 0.0);
        assert_eq!(jaro_similarity(Some("a"), None, false), 0.0);
        assert_eq!(jaro_winkler_similarity(None, None, opts), 0.0);
        assert_eq!(jaro_winkler_distance(None, Some("a"), opts), 0.0);
        assert_eq!(levenshtein_distance(None, Some("a"), false), UNDEFINED_DISTANCE);
        assert_eq!(damerau_levenshtein_distance(Some("a"), None, true), UNDEFINED_DISTANCE);
    }

    #[test]
    fn test_empty_is_not_absent() {
        let opts = ComparisonOptions::default();
        assert_eq!(levenshtein_distance(Some(""), Some("abc"), false), 3);
        assert_eq!(damerau_levenshtein_distance(Some(""), Some(""), false), 0);
        assert_eq!(jaro_similarity(Some(""), Some(""), false), 1.0);
        assert_eq!(jaro_winkler_distance(Some(""), Some("abc"), opts), 1.0);
        assert_eq!(sorensen_dice_coefficient(Some(""), Some(""), false), 1.0);
    }

    #[test]
    fn test_jaro_winkler_distance_complements() {
        let opts = ComparisonOptions::default();
        let sim = jaro_winkler_similarity(Some("martha"), Some("marhta"), opts);
        let dist = jaro_winkler_distance(Some("martha"), Some("marhta"), opts);
        assert!(approx_eq(sim + dist, 1.0));
    }

    #[test]
    fn test_ignore_case_flows_through_options() {
        let opts = ComparisonOptions::default().with_ignore_case(true);
        assert!(approx_eq(
            jaro_winkler_similarity(Some("MARTHA"), Some("marhta"), opts),
            0.96111
        ));
    }
}
