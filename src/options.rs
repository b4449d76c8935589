//! Comparison options
//!
//! A single immutable bundle of named options, passed by value to every call.

use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};

/// Default Jaro-Winkler prefix scaling factor
pub const DEFAULT_PREFIX_SCALING_FACTOR: f64 = 0.1;
/// Default maximum prefix length rewarded by Jaro-Winkler
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 4;
/// Default Jaro score a pair must exceed before the prefix bonus applies
pub const DEFAULT_PREFIX_BONUS_THRESHOLD: f64 = 0.7;

/// Options shared by all metrics.
///
/// Only `ignore_case` affects every metric; the prefix options are read by
/// Jaro-Winkler alone and ignored elsewhere.
///
/// # Example
///
/// ```rust
/// use strmetrics::ComparisonOptions;
///
/// let opts = ComparisonOptions::default()
///     .with_ignore_case(true)
///     .with_prefix_scaling_factor(0.2);
/// assert!(opts.ignore_case);
/// assert_eq!(opts.max_prefix_length, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Compare after full Unicode case folding
    pub ignore_case: bool,
    /// Weight of each shared prefix cluster (typically 0.1)
    pub prefix_scaling_factor: f64,
    /// Maximum number of shared prefix clusters rewarded (typically 4)
    pub max_prefix_length: usize,
    /// Jaro score that must be exceeded for the prefix bonus to apply
    pub prefix_bonus_threshold: f64,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            prefix_scaling_factor: DEFAULT_PREFIX_SCALING_FACTOR,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
            prefix_bonus_threshold: DEFAULT_PREFIX_BONUS_THRESHOLD,
        }
    }
}

impl ComparisonOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    #[must_use]
    pub fn with_prefix_scaling_factor(mut self, factor: f64) -> Self {
        self.prefix_scaling_factor = factor;
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self
    }

    #[must_use]
    pub fn with_prefix_bonus_threshold(mut self, threshold: f64) -> Self {
        self.prefix_bonus_threshold = threshold;
        self
    }

    /// Check that every option lies in its valid domain.
    ///
    /// Comparisons accept unvalidated options (the Jaro-Winkler result is
    /// clamped and a NaN bonus dropped); this is for callers loading options
    /// from untrusted configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.prefix_scaling_factor.is_finite() || self.prefix_scaling_factor < 0.0 {
            return Err(MetricsError::InvalidOption {
                name: "prefix_scaling_factor",
                value: self.prefix_scaling_factor.to_string(),
                reason: "must be a finite, non-negative number",
            });
        }
        if !self.prefix_bonus_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.prefix_bonus_threshold)
        {
            return Err(MetricsError::InvalidOption {
                name: "prefix_bonus_threshold",
                value: self.prefix_bonus_threshold.to_string(),
                reason: "must be in range [0.0, 1.0]",
            });
        }
        Ok(())
    }

    /// Whether the configured bonus can push a score past 1.0 before clamping
    #[must_use]
    pub(crate) fn bonus_may_overflow(&self) -> bool {
        self.max_prefix_length as f64 * self.prefix_scaling_factor > 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ComparisonOptions::default();
        assert!(!opts.ignore_case);
        assert_eq!(opts.prefix_scaling_factor, 0.1);
        assert_eq!(opts.max_prefix_length, 4);
        assert_eq!(opts.prefix_bonus_threshold, 0.7);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let opts = ComparisonOptions::default().with_prefix_scaling_factor(f64::NAN);
        assert!(matches!(
            opts.validate(),
            Err(MetricsError::InvalidOption { name: "prefix_scaling_factor", .. })
        ));

        let opts = ComparisonOptions::default().with_prefix_bonus_threshold(1.5);
        assert!(matches!(
            opts.validate(),
            Err(MetricsError::InvalidOption { name: "prefix_bonus_threshold", .. })
        ));
    }

    #[test]
    fn test_bonus_overflow_detection() {
        assert!(!ComparisonOptions::default().bonus_may_overflow());
        assert!(ComparisonOptions::default()
            .with_prefix_scaling_factor(0.5)
            .bonus_may_overflow());
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: ComparisonOptions =
            serde_json::from_str(r#"{"ignore_case": true, "max_prefix_length": 2}"#)
                .expect("valid json");
        assert!(opts.ignore_case);
        assert_eq!(opts.max_prefix_length, 2);
        assert_eq!(opts.prefix_scaling_factor, 0.1);
    }
}
