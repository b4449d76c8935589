//! Bigram multisets and the Sørensen-Dice coefficient
//!
//! Bigrams are adjacent pairs of grapheme clusters. They are kept as a
//! multiset: a bigram occurring twice counts twice, and the intersection of
//! two multisets takes the smaller multiplicity of each bigram.

use super::normalize::Graphemes;
use super::Similarity;
use ahash::AHashMap;
use std::hash::Hash;

/// Sørensen-Dice coefficient over grapheme bigrams
///
/// # Complexity
/// - Time: O(m+n) for bigram extraction and counting
/// - Space: O(n) for the bigram counts of one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SorensenDice {
    /// Compare after Unicode case folding
    pub ignore_case: bool,
}

impl SorensenDice {
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

impl Similarity for SorensenDice {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        sorensen_dice(
            &Graphemes::new(a, self.ignore_case),
            &Graphemes::new(b, self.ignore_case),
        )
    }

    fn name(&self) -> &'static str {
        "sorensen_dice"
    }
}

/// All `n - 1` adjacent pairs of a sequence, in order.
///
/// Sequences shorter than two produce nothing.
#[inline]
pub fn bigrams<T>(seq: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    seq.windows(2).map(|w| (&w[0], &w[1]))
}

/// Count the occurrences of each bigram in `seq`
#[must_use]
pub fn bigram_counts<T: Hash + Eq>(seq: &[T]) -> AHashMap<(&T, &T), usize> {
    let mut counts = AHashMap::with_capacity(seq.len().saturating_sub(1));
    for bigram in bigrams(seq) {
        *counts.entry(bigram).or_insert(0) += 1;
    }
    counts
}

/// Sørensen-Dice coefficient of two grapheme sequences.
///
/// `2 * |A ∩ B| / (|A| + |B|)` over bigram multisets. When neither side has a
/// bigram (both have fewer than two clusters) the result is 1.0 for equal
/// sequences and 0.0 otherwise.
#[must_use]
pub fn sorensen_dice<T: Hash + Eq>(a: &[T], b: &[T]) -> f64 {
    let a_total = a.len().saturating_sub(1);
    let b_total = b.len().saturating_sub(1);

    if a_total == 0 && b_total == 0 {
        return if a == b { 1.0 } else { 0.0 };
    }

    let mut b_counts = bigram_counts(b);
    let mut intersection = 0usize;
    for bigram in bigrams(a) {
        if let Some(remaining) = b_counts.get_mut(&bigram) {
            if *remaining > 0 {
                *remaining -= 1;
                intersection += 1;
            }
        }
    }

    (2.0 * intersection as f64) / (a_total + b_total) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(a: &str, b: &str) -> f64 {
        sorensen_dice(&Graphemes::new(a, false), &Graphemes::new(b, false))
    }

    #[test]
    fn test_bigrams() {
        let g = Graphemes::new("abc", false);
        let pairs: Vec<(&str, &str)> = bigrams(&g).map(|(x, y)| (&**x, &**y)).collect();
        assert_eq!(pairs, vec![("a", "b"), ("b", "c")]);

        assert_eq!(bigrams(&Graphemes::new("a", false)).count(), 0);
        assert_eq!(bigrams(&Graphemes::new("", false)).count(), 0);
    }

    #[test]
    fn test_bigram_counts_keep_duplicates() {
        let g = Graphemes::new("nightht", false);
        let counts = bigram_counts(&g);
        assert_eq!(counts.values().sum::<usize>(), 6);
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn test_dice_examples() {
        assert_eq!(dice("night", "night"), 1.0);
        assert_eq!(dice("night", "nacht"), 0.25);
        assert_eq!(dice("münchen", "munch"), 0.4);
        assert_eq!(dice("অআইঈউ", "অঝইঈউ"), 0.5);
    }

    #[test]
    fn test_dice_no_double_counting() {
        // "ht" appears twice on the left but once on the right
        assert_eq!(dice("nightht", "hta"), 0.25);
    }

    #[test]
    fn test_dice_short_inputs() {
        assert_eq!(dice("", ""), 1.0);
        assert_eq!(dice("a", "a"), 1.0);
        assert_eq!(dice("a", "b"), 0.0);
        assert_eq!(dice("a", ""), 0.0);
        assert_eq!(dice("a", "ab"), 0.0);
    }

    #[test]
    fn test_struct_ignore_case() {
        let dice = SorensenDice::new().with_ignore_case(true);
        assert_eq!(dice.similarity("night", "niGHt"), 1.0);
        assert_eq!(dice.similarity("mÜnchen", "münch"), 0.8);
        assert_eq!(SorensenDice::new().similarity("night", "niGHt"), 0.25);
        assert_eq!(Similarity::name(&dice), "sorensen_dice");
    }
}
