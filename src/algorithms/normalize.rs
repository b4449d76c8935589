//! Grapheme normalization
//!
//! Every metric compares sequences of extended grapheme clusters, never bytes
//! or code points. A base letter followed by combining marks is one unit and
//! is never equal to the bare letter.
//!
//! Case folding is applied per cluster after segmentation, so folding can
//! never merge or split clusters.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::ops::Deref;
use unicode_casefold::UnicodeCaseFold;
use unicode_segmentation::UnicodeSegmentation;

/// A text value split into grapheme clusters, optionally case-folded.
///
/// Clusters borrow from the source text unless folding changed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graphemes<'a> {
    clusters: SmallVec<[Cow<'a, str>; 32]>,
}

impl<'a> Graphemes<'a> {
    /// Segment `text` into extended grapheme clusters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strmetrics::algorithms::normalize::Graphemes;
    ///
    /// // "y" followed by a combining breve is a single cluster
    /// let g = Graphemes::new("y\u{306}es", false);
    /// assert_eq!(g.len(), 3);
    ///
    /// let folded = Graphemes::new("MÜNCHEN", true);
    /// assert_eq!(folded, Graphemes::new("münchen", false));
    /// ```
    #[must_use]
    pub fn new(text: &'a str, ignore_case: bool) -> Self {
        let clusters = text
            .graphemes(true)
            .map(|cluster| {
                if ignore_case {
                    fold_cluster(cluster)
                } else {
                    Cow::Borrowed(cluster)
                }
            })
            .collect();
        Self { clusters }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cow<'a, str>] {
        &self.clusters
    }

    /// Length of the shared leading run of clusters, capped at `max`
    #[must_use]
    pub fn common_prefix_len(&self, other: &Graphemes<'_>, max: usize) -> usize {
        self.iter()
            .zip(other.iter())
            .take(max)
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl<'a> Deref for Graphemes<'a> {
    type Target = [Cow<'a, str>];

    fn deref(&self) -> &Self::Target {
        &self.clusters
    }
}

/// Full Unicode case folding of a single cluster.
///
/// ASCII clusters take a byte-level shortcut; anything else goes through the
/// Unicode `CaseFolding.txt` mapping (so `ß` folds to `ss`, `Σ` to `σ`).
#[inline]
fn fold_cluster(cluster: &str) -> Cow<'_, str> {
    if cluster.is_ascii() {
        if cluster.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(cluster.to_ascii_lowercase());
        }
        return Cow::Borrowed(cluster);
    }

    let folded: String = cluster.chars().case_fold().collect();
    if folded == cluster {
        Cow::Borrowed(cluster)
    } else {
        Cow::Owned(folded)
    }
}

/// Normalize a possibly absent text value.
///
/// Absent stays absent; it is never turned into an empty sequence.
#[inline]
#[must_use]
pub fn normalize(input: Option<&str>, ignore_case: bool) -> Option<Graphemes<'_>> {
    input.map(|text| Graphemes::new(text, ignore_case))
}

/// Normalize both inputs, yielding `None` if either is absent
#[inline]
#[must_use]
pub fn normalize_pair<'a, 'b>(
    a: Option<&'a str>,
    b: Option<&'b str>,
    ignore_case: bool,
) -> Option<(Graphemes<'a>, Graphemes<'b>)> {
    Some((normalize(a, ignore_case)?, normalize(b, ignore_case)?))
}
