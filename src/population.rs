//! Synthetic population generation and ownership.
//!
//! A [`Population`] is the finite reference set of values treated as
//! ground truth by the simulation: its true mean and standard deviation
//! are the *configured* parameters, not measured from the generated
//! values. The value sequence is immutable after creation; regeneration
//! replaces the whole population, never mutates it in place.

use rand::Rng;

use crate::distributions::Normal;
use crate::error::{EngineError, Result};

/// An immutable, finite population with known true parameters.
///
/// Order carries no statistical meaning; it exists only for positional
/// indexing during with-replacement sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    values: Vec<f64>,
    mean: f64,
    std_dev: f64,
}

impl Population {
    /// Synthesizes a population of `size` independent draws from
    /// N(`mean`, `std_dev`²).
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidArgument`] if `size == 0`, `mean`
    /// is not finite, or `std_dev ≤ 0`.
    ///
    /// # Examples
    /// ```
    /// use intervalsim::population::Population;
    /// use intervalsim::random::create_rng;
    /// let mut rng = create_rng(42);
    /// let pop = Population::synthesize(1_000, 3.5, 1.0, &mut rng).unwrap();
    /// assert_eq!(pop.len(), 1_000);
    /// assert_eq!(pop.true_mean(), 3.5);
    /// ```
    pub fn synthesize<R: Rng>(size: usize, mean: f64, std_dev: f64, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(EngineError::InvalidArgument(
                "population size must be at least 1".into(),
            ));
        }
        let dist = Normal::new(mean, std_dev)?;
        let values = (0..size).map(|_| dist.sample(rng)).collect();
        Ok(Self {
            values,
            mean,
            std_dev,
        })
    }

    /// Wraps caller-supplied values with declared true parameters.
    ///
    /// Intended for deterministic setups (fixtures, regression tests)
    /// where the values are not drawn from the internal generator. The
    /// values are not validated against the declared parameters, and may
    /// be empty — sampling entry points reject empty populations.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidArgument`] if `mean` is not finite
    /// or `std_dev ≤ 0`.
    pub fn from_values(values: Vec<f64>, mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(EngineError::InvalidArgument(format!(
                "population parameters require finite mean and std dev > 0, got mean={mean}, std dev={std_dev}"
            )));
        }
        Ok(Self {
            values,
            mean,
            std_dev,
        })
    }

    /// The generated values, in synthesis order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the population.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the population holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The configured true mean (not measured from the values).
    pub fn true_mean(&self) -> f64 {
        self.mean
    }

    /// The configured true standard deviation (not measured).
    pub fn true_std_dev(&self) -> f64 {
        self.std_dev
    }
}

// ============================================================================
// Tests
// ============================================================================
