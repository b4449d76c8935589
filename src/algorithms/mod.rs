//! Core string similarity algorithms
//!
//! Each engine is a standalone function over grapheme slices for composability,
//! plus a trait-based interface for use as a metric object.

pub mod damerau;
pub mod encoding;
pub mod jaro;
pub mod levenshtein;
pub mod ngram;
pub mod normalize;

pub use damerau::*;
pub use jaro::*;
pub use levenshtein::*;
pub use ngram::*;

use unicode_segmentation::UnicodeSegmentation;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Convert to normalized similarity score (0.0 to 1.0).
    ///
    /// Lengths are counted in grapheme clusters, matching the unit the
    /// distance itself is measured in.
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let dist = self.distance(a, b);
        let max_len = a.graphemes(true).count().max(b.graphemes(true).count());
        if max_len == 0 {
            1.0
        } else {
            (1.0 - (dist as f64 / max_len as f64)).clamp(0.0, 1.0)
        }
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}
