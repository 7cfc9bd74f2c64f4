//! Critical value (z-score) resolution.
//!
//! Maps a two-sided confidence percentage to the critical value of the
//! standard normal distribution. The default resolver matches against a
//! small fixed table of (critical value, cumulative probability)
//! anchors — a deliberate step-function approximation of the inverse
//! normal CDF, so confidence levels between anchors snap to the nearest
//! entry. [`resolve_critical_value_exact`] offers the continuous
//! alternative via the rational approximation in [`crate::special`].

use crate::error::{EngineError, Result};
use crate::special;

/// Fixed (critical value, two-sided cumulative probability) anchors.
///
/// Iteration order is the tie-break order: of two equally close
/// probabilities, the first entry wins.
const CRITICAL_TABLE: [(f64, f64); 8] = [
    (1.28, 0.90),
    (1.44, 0.925),
    (1.645, 0.95),
    (1.96, 0.975),
    (2.326, 0.99),
    (2.576, 0.995),
    (2.807, 0.9975),
    (3.291, 0.999),
];

fn target_probability(confidence_level: f64) -> Result<f64> {
    if !confidence_level.is_finite() || confidence_level <= 0.0 || confidence_level >= 100.0 {
        return Err(EngineError::InvalidArgument(format!(
            "confidence level must be in (0, 100), got {confidence_level}"
        )));
    }
    let alpha = 1.0 - confidence_level / 100.0;
    Ok(1.0 - alpha / 2.0)
}

/// Resolves a confidence level (percent) to a tabulated critical value.
///
/// # Algorithm
/// Computes the two-sided cumulative probability
/// `p = 1 − (1 − level/100)/2`, then returns the table entry whose
/// probability is closest to `p` in absolute difference. Ties break to
/// the first entry in table order.
///
/// # Errors
/// Returns [`EngineError::InvalidArgument`] for levels outside (0, 100)
/// or non-finite levels, rather than silently snapping to a nearest
/// anchor that would be nonsensical.
///
/// # Examples
/// ```
/// use intervalsim::critical::resolve_critical_value;
/// assert_eq!(resolve_critical_value(95.0).unwrap(), 1.96);
/// assert_eq!(resolve_critical_value(99.0).unwrap(), 2.576);
/// assert!(resolve_critical_value(0.0).is_err());
/// ```
pub fn resolve_critical_value(confidence_level: f64) -> Result<f64> {
    let p = target_probability(confidence_level)?;
    let mut best = CRITICAL_TABLE[0];
    for &entry in &CRITICAL_TABLE[1..] {
        if (entry.1 - p).abs() < (best.1 - p).abs() {
            best = entry;
        }
    }
    Ok(best.0)
}

/// Resolves a confidence level to a continuous critical value.
///
/// Unlike [`resolve_critical_value`], this evaluates the inverse
/// standard normal CDF directly (A&S 26.2.23, absolute error < 4.5e-4),
/// so levels between the table anchors get a proper intermediate
/// z-score instead of snapping to the nearest anchor.
///
/// # Errors
/// Returns [`EngineError::InvalidArgument`] for levels outside (0, 100).
///
/// # Examples
/// ```
/// use intervalsim::critical::resolve_critical_value_exact;
/// let z = resolve_critical_value_exact(95.0).unwrap();
/// assert!((z - 1.96).abs() < 0.01);
/// ```
pub fn resolve_critical_value_exact(confidence_level: f64) -> Result<f64> {
    let p = target_probability(confidence_level)?;
    Ok(special::inverse_normal_cdf(p))
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn table_resolver_returns_table_values(level in 0.01_f64..99.99) {
            let z = resolve_critical_value(level).unwrap();
            prop_assert!(CRITICAL_TABLE.iter().any(|&(cv, _)| cv == z));
        }

        #[test]
        fn table_resolver_monotone(a in 0.01_f64..99.99, b in 0.01_f64..99.99) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let z_lo = resolve_critical_value(lo).unwrap();
            let z_hi = resolve_critical_value(hi).unwrap();
            prop_assert!(z_lo <= z_hi, "z({}) = {} > z({}) = {}", lo, z_lo, hi, z_hi);
        }

        #[test]
        fn exact_resolver_positive_above_half(level in 1.0_f64..99.99) {
            // Two-sided p is always > 0.5, so z must be positive.
            let z = resolve_critical_value_exact(level).unwrap();
            prop_assert!(z > 0.0 && z.is_finite());
        }
    }
}
