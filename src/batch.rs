//! One-against-many scoring
//!
//! Scores a single query against a list of choices with any metric. The query
//! is segmented once and reused for every comparison; large choice lists are
//! scored in parallel.

use crate::algorithms::normalize::Graphemes;
use crate::algorithms::{damerau_levenshtein, jaro, jaro_winkler, levenshtein, sorensen_dice};
use crate::options::ComparisonOptions;
use crate::{UNDEFINED_DISTANCE, UNDEFINED_SIMILARITY};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Minimum input size for parallel processing.
///
/// For inputs smaller than this threshold, sequential processing is faster
/// due to the overhead of thread pool coordination.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Metric selector for batch scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SorensenDice,
    Jaro,
    JaroWinkler,
    JaroWinklerDistance,
    Levenshtein,
    DamerauLevenshtein,
}

/// Result of a single comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Similarity, coefficient or Jaro-Winkler distance, in [0.0, 1.0]
    Ratio(f64),
    /// Edit count, or [`UNDEFINED_DISTANCE`] for absent input
    Edits(usize),
}

impl Score {
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Ratio(r) => r,
            Score::Edits(e) => e as f64,
        }
    }

    /// Whether this is the undefined-input sentinel for its family
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Score::Edits(UNDEFINED_DISTANCE))
    }
}

impl Metric {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Metric::SorensenDice => "sorensen_dice",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler => "jaro_winkler",
            Metric::JaroWinklerDistance => "jaro_winkler_distance",
            Metric::Levenshtein => "levenshtein",
            Metric::DamerauLevenshtein => "damerau_levenshtein",
        }
    }

    /// Lower scores are better for distances
    #[must_use]
    pub fn lower_is_better(&self) -> bool {
        matches!(
            self,
            Metric::JaroWinklerDistance | Metric::Levenshtein | Metric::DamerauLevenshtein
        )
    }

    /// The sentinel this metric reports for absent input
    #[must_use]
    pub fn undefined(&self) -> Score {
        match self {
            Metric::Levenshtein | Metric::DamerauLevenshtein => Score::Edits(UNDEFINED_DISTANCE),
            _ => Score::Ratio(UNDEFINED_SIMILARITY),
        }
    }

    /// Score two already-normalized texts
    #[must_use]
    pub fn score(&self, a: &Graphemes<'_>, b: &Graphemes<'_>, options: &ComparisonOptions) -> Score {
        match self {
            Metric::SorensenDice => Score::Ratio(sorensen_dice(a, b)),
            Metric::Jaro => Score::Ratio(jaro(a, b)),
            Metric::JaroWinkler => Score::Ratio(jaro_winkler(a, b, options)),
            Metric::JaroWinklerDistance => Score::Ratio(1.0 - jaro_winkler(a, b, options)),
            Metric::Levenshtein => Score::Edits(levenshtein(a, b)),
            Metric::DamerauLevenshtein => Score::Edits(damerau_levenshtein(a, b)),
        }
    }
}

/// Score `query` against every choice, preserving input order.
///
/// An absent query yields the metric's sentinel for every choice.
///
/// # Example
///
/// ```rust
/// use strmetrics::{score_many, ComparisonOptions, Metric, Score};
///
/// let scores = score_many(Some("kitten"), &["sitting", "kitten"], Metric::Levenshtein, ComparisonOptions::default());
/// assert_eq!(scores, vec![Score::Edits(3), Score::Edits(0)]);
/// ```
#[must_use]
pub fn score_many<S: AsRef<str> + Sync>(
    query: Option<&str>,
    choices: &[S],
    metric: Metric,
    options: ComparisonOptions,
) -> Vec<Score> {
    let Some(query) = query else {
        tracing::trace!(metric = metric.name(), "absent query, returning sentinels");
        return vec![metric.undefined(); choices.len()];
    };

    let query = Graphemes::new(query, options.ignore_case);
    let score_one = |choice: &S| {
        let choice = Graphemes::new(choice.as_ref(), options.ignore_case);
        metric.score(&query, &choice, &options)
    };

    let parallel = choices.len() >= PARALLEL_THRESHOLD;
    tracing::debug!(
        metric = metric.name(),
        choices = choices.len(),
        parallel,
        "batch scoring"
    );

    if parallel {
        choices.par_iter().map(score_one).collect()
    } else {
        choices.iter().map(score_one).collect()
    }
}

/// Best-scoring choice as `(index, score)`.
///
/// Highest score wins for similarities, lowest for distances; ties go to the
/// earliest choice. `None` when the query is absent or there are no choices.
#[must_use]
pub fn best_match<S: AsRef<str> + Sync>(
    query: Option<&str>,
    choices: &[S],
    metric: Metric,
    options: ComparisonOptions,
) -> Option<(usize, Score)> {
    query?;

    let scores = score_many(query, choices, metric, options);
    let mut best: Option<(usize, Score)> = None;
    for (i, score) in scores.into_iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, current)) if metric.lower_is_better() => score.as_f64() < current.as_f64(),
            Some((_, current)) => score.as_f64() > current.as_f64(),
        };
        if better {
            best = Some((i, score));
        }
    }
    best
}
