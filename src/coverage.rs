//! Empirical coverage aggregation.
//!
//! Reduces a batch of interval trials to a single coverage statistic:
//! how many intervals actually contain the true population mean, and
//! what fraction of the batch that is. Over many trials the fraction
//! converges toward the nominal confidence level.

use crate::error::{EngineError, Result};
use crate::estimate::Trial;

/// Aggregate coverage of one simulation run.
///
/// Recomputed fresh from the current trial set; never merged with a
/// previous run's result.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    /// Number of trials whose interval contains the true mean.
    pub covered: usize,
    /// Total number of trials examined.
    pub total: usize,
    /// `covered / total`, always in [0, 1].
    pub fraction: f64,
}

/// Counts the trials whose interval contains `true_mean` (inclusive on
/// both bounds) and derives the empirical coverage fraction.
///
/// Pure function; no side effects.
///
/// # Errors
/// Returns [`EngineError::InvalidArgument`] if `trials` is empty (the
/// fraction would be 0/0) or `true_mean` is not finite.
///
/// # Examples
/// ```
/// use intervalsim::coverage::aggregate;
/// use intervalsim::estimate::Trial;
/// let trials = vec![
///     Trial { id: 1, x: 0, lower: 3.0, upper: 4.0, mean: 3.5 },
///     Trial { id: 2, x: 1, lower: 3.6, upper: 4.2, mean: 3.9 },
/// ];
/// let cov = aggregate(&trials, 3.5).unwrap();
/// assert_eq!(cov.covered, 1);
/// assert_eq!(cov.total, 2);
/// assert_eq!(cov.fraction, 0.5);
/// ```
pub fn aggregate(trials: &[Trial], true_mean: f64) -> Result<CoverageResult> {
    if trials.is_empty() {
        return Err(EngineError::InvalidArgument(
            "coverage requires at least one trial".into(),
        ));
    }
    if !true_mean.is_finite() {
        return Err(EngineError::InvalidArgument(format!(
            "true mean must be finite, got {true_mean}"
        )));
    }

    let covered = trials.iter().filter(|t| t.contains(true_mean)).count();
    let total = trials.len();
    Ok(CoverageResult {
        covered,
        total,
        fraction: covered as f64 / total as f64,
    })
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_trials() -> impl Strategy<Value = Vec<Trial>> {
        proptest::collection::vec((-100.0_f64..100.0, 0.0_f64..50.0), 1..50).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (center, half_width))| Trial {
                    id: i + 1,
                    x: i,
                    lower: center - half_width,
                    upper: center + half_width,
                    mean: center,
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn fraction_in_unit_interval(trials in arb_trials(), m in -200.0_f64..200.0) {
            let cov = aggregate(&trials, m).unwrap();
            prop_assert!(cov.covered <= cov.total);
            prop_assert!((0.0..=1.0).contains(&cov.fraction));
            prop_assert_eq!(cov.total, trials.len());
        }

        #[test]
        fn fraction_matches_count(trials in arb_trials(), m in -200.0_f64..200.0) {
            let cov = aggregate(&trials, m).unwrap();
            let expected = cov.covered as f64 / cov.total as f64;
            prop_assert_eq!(cov.fraction, expected);
        }
    }
}
