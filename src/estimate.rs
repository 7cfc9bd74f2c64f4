//! Sampling and confidence interval estimation.
//!
//! For each trial, draws one simple random sample **with replacement**
//! from the population (each draw picks a uniformly random index;
//! duplicates allowed), then computes the two-sided interval
//! `mean ± z·SE` around that trial's own sample mean. Trials are fully
//! independent given the shared population, which is only ever read.

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::population::Population;
use crate::stats::WelfordAccumulator;

/// One independent sampling event and its interval estimate.
///
/// `lower ≤ upper` always holds: both bounds are `mean ∓ margin` with
/// `margin ≥ 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    /// 1-based ordinal of the trial.
    pub id: usize,
    /// 0-based trial index (plot coordinate).
    pub x: usize,
    /// Lower interval bound: `mean − margin`.
    pub lower: f64,
    /// Upper interval bound: `mean + margin`.
    pub upper: f64,
    /// Sample mean of this trial's draws.
    pub mean: f64,
}

impl Trial {
    /// Interval width `upper − lower` = `2·margin`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if the interval contains `value` (inclusive bounds).
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Runs `trial_count` independent sampling trials against `population`.
///
/// Per trial: draw `sample_size` values with replacement, compute the
/// sample mean and Bessel-corrected standard deviation in one Welford
/// pass, derive the standard error `sd/√n` and margin `z·SE`, and emit
/// the interval centered on the sample mean. The returned sequence has
/// exactly `trial_count` trials in ascending index order.
///
/// # Errors
/// - [`EngineError::InvalidState`] if `population` is empty (sampling
///   requires a synthesized population).
/// - [`EngineError::InvalidArgument`] if `sample_size < 2` (the n−1
///   denominator needs at least two draws), `trial_count == 0`, or
///   `critical_value` is not a positive finite number.
///
/// # Examples
/// ```
/// use intervalsim::estimate::estimate;
/// use intervalsim::population::Population;
/// use intervalsim::random::create_rng;
/// let mut rng = create_rng(42);
/// let pop = Population::synthesize(1_000, 3.5, 1.0, &mut rng).unwrap();
/// let trials = estimate(&pop, 30, 1.96, 20, &mut rng).unwrap();
/// assert_eq!(trials.len(), 20);
/// assert!(trials.iter().all(|t| t.lower <= t.upper));
/// ```
pub fn estimate<R: Rng>(
    population: &Population,
    sample_size: usize,
    critical_value: f64,
    trial_count: usize,
    rng: &mut R,
) -> Result<Vec<Trial>> {
    if population.is_empty() {
        return Err(EngineError::InvalidState(
            "sampling requires a non-empty, synthesized population".into(),
        ));
    }
    if sample_size < 2 {
        return Err(EngineError::InvalidArgument(format!(
            "sample size must be at least 2, got {sample_size}"
        )));
    }
    if trial_count == 0 {
        return Err(EngineError::InvalidArgument(
            "trial count must be at least 1".into(),
        ));
    }
    if !critical_value.is_finite() || critical_value <= 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "critical value must be positive and finite, got {critical_value}"
        )));
    }

    let values = population.values();
    let sqrt_n = (sample_size as f64).sqrt();
    let mut trials = Vec::with_capacity(trial_count);

    for i in 0..trial_count {
        let mut acc = WelfordAccumulator::new();
        for _ in 0..sample_size {
            let idx = rng.random_range(0..values.len());
            acc.update(values[idx]);
        }
        // sample_size >= 2, so both statistics are defined.
        let mean = acc.mean().expect("at least two draws");
        let sd = acc.sample_std_dev().expect("at least two draws");

        let standard_error = sd / sqrt_n;
        let margin = critical_value * standard_error;

        trials.push(Trial {
            id: i + 1,
            x: i,
            lower: mean - margin,
            upper: mean + margin,
            mean,
        });
    }

    Ok(trials)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn test_population(seed: u64) -> Population {
        let mut rng = create_rng(seed);
        Population::synthesize(10_000, 3.5, 1.0, &mut rng).unwrap()
    }

    #[test]
    fn test_exact_trial_count_and_ordering() {
        let pop = test_population(1);
        let mut rng = create_rng(42);
        let trials = estimate(&pop, 30, 1.96, 20, &mut rng).unwrap();
        assert_eq!(trials.len(), 20);
        for (i, t) in trials.iter().enumerate() {
            assert_eq!(t.x, i);
            assert_eq!(t.id, i + 1);
        }
    }

    #[test]
    fn test_interval_centered_on_sample_mean() {
        let pop = test_population(1);
        let mut rng = create_rng(42);
        let trials = estimate(&pop, 30, 1.96, 50, &mut rng).unwrap();
        for t in &trials {
            assert!(t.lower <= t.upper);
            // Margin > 0 for continuous data, so the mean is strictly inside.
            assert!(t.lower < t.mean && t.mean < t.upper);
            let center = (t.lower + t.upper) / 2.0;
            assert!((center - t.mean).abs() < 1e-12, "interval not centered");
        }
    }

    #[test]
    fn test_expected_interval_width() {
        // Width ≈ 2·z·(σ/√n) = 2·1.96·(1/√30) ≈ 0.7157, with per-trial
        // spread from the sample std dev estimate (sd of width ~0.095).
        let pop = test_population(1);
        let mut rng = create_rng(42);
        let trials = estimate(&pop, 30, 1.96, 200, &mut rng).unwrap();
        let avg_width: f64 = trials.iter().map(Trial::width).sum::<f64>() / trials.len() as f64;
        assert!(
            (avg_width - 0.716).abs() < 0.05,
            "average width {avg_width} far from 2·1.96/√30"
        );
    }

    #[test]
    fn test_larger_samples_tighten_intervals() {
        let pop = test_population(1);
        let mut rng = create_rng(42);
        let narrow = estimate(&pop, 90, 1.96, 200, &mut rng).unwrap();
        let wide = estimate(&pop, 10, 1.96, 200, &mut rng).unwrap();
        let avg = |ts: &[Trial]| ts.iter().map(Trial::width).sum::<f64>() / ts.len() as f64;
        assert!(
            avg(&narrow) < avg(&wide),
            "n=90 should produce tighter intervals than n=10"
        );
    }

    #[test]
    fn test_higher_critical_value_widens_intervals() {
        // Same seed, so both runs draw identical samples.
        let pop = test_population(1);
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let at_95 = estimate(&pop, 30, 1.96, 50, &mut rng1).unwrap();
        let at_99 = estimate(&pop, 30, 2.576, 50, &mut rng2).unwrap();
        for (a, b) in at_95.iter().zip(&at_99) {
            assert_eq!(a.mean, b.mean, "same draws expected");
            assert!(b.width() > a.width());
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let pop = test_population(1);
        let mut rng1 = create_rng(7);
        let mut rng2 = create_rng(7);
        let a = estimate(&pop, 30, 1.96, 20, &mut rng1).unwrap();
        let b = estimate(&pop, 30, 1.96, 20, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_variance_sample_degenerates_to_point() {
        // A constant population forces sd = 0, so lower == mean == upper.
        let pop = Population::from_values(vec![4.0; 100], 4.0, 1.0).unwrap();
        let mut rng = create_rng(42);
        let trials = estimate(&pop, 10, 1.96, 5, &mut rng).unwrap();
        for t in &trials {
            assert_eq!(t.lower, t.mean);
            assert_eq!(t.upper, t.mean);
            assert_eq!(t.mean, 4.0);
        }
    }

    #[test]
    fn test_empty_population_is_invalid_state() {
        let pop = Population::from_values(vec![], 0.0, 1.0).unwrap();
        let mut rng = create_rng(0);
        let err = estimate(&pop, 30, 1.96, 20, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidState(_)));
    }

    #[test]
    fn test_sample_size_below_two_is_invalid() {
        let pop = test_population(1);
        let mut rng = create_rng(0);
        for n in [0, 1] {
            let err = estimate(&pop, n, 1.96, 20, &mut rng).unwrap_err();
            assert!(
                matches!(err, EngineError::InvalidArgument(_)),
                "sample size {n} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_trials_is_invalid() {
        let pop = test_population(1);
        let mut rng = create_rng(0);
        let err = estimate(&pop, 30, 1.96, 0, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
    }

    #[test]
    fn test_bad_critical_value_is_invalid() {
        let pop = test_population(1);
        let mut rng = create_rng(0);
        for z in [0.0, -1.96, f64::NAN, f64::INFINITY] {
            assert!(
                estimate(&pop, 30, z, 20, &mut rng).is_err(),
                "critical value {z} should be rejected"
            );
        }
    }

    #[test]
    fn test_no_nan_output() {
        let pop = test_population(3);
        let mut rng = create_rng(42);
        let trials = estimate(&pop, 2, 3.291, 100, &mut rng).unwrap();
        for t in &trials {
            assert!(t.lower.is_finite() && t.upper.is_finite() && t.mean.is_finite());
        }
    }
}
