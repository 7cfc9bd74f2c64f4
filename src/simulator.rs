//! Simulation session orchestration.
//!
//! A [`Simulator`] owns the process-local session state: the current
//! population and the RNG. Resetting the population replaces it
//! wholesale; each [`Simulator::run`] recomputes trials and coverage
//! from scratch and never merges with a previous run.
//!
//! A run is one atomic, synchronous unit of work — critical value
//! resolution, the full trial batch, then coverage aggregation — so a
//! caller driving a UI only needs a busy/idle flag around `run` to
//! guard re-entrancy. The engine holds no internal locks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::coverage::{self, CoverageResult};
use crate::critical;
use crate::error::Result;
use crate::estimate::{self, Trial};
use crate::population::Population;
use crate::random::create_rng;

/// Default population size used when a run starts without one.
pub const DEFAULT_POPULATION_SIZE: usize = 10_000;
/// Default true mean of the synthesized population.
pub const DEFAULT_POPULATION_MEAN: f64 = 3.5;
/// Default true standard deviation of the synthesized population.
pub const DEFAULT_POPULATION_STD_DEV: f64 = 1.0;

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunParams {
    /// Number of draws per trial (conventionally 10–100).
    pub sample_size: usize,
    /// Two-sided confidence percentage in (0, 100) (conventionally 80–99).
    pub confidence_level: f64,
    /// Number of independent trials (conventionally 1–100).
    pub trial_count: usize,
}

impl Default for RunParams {
    /// The conventional starting configuration: n=30 draws per trial at
    /// 95% confidence, 20 trials.
    fn default() -> Self {
        Self {
            sample_size: 30,
            confidence_level: 95.0,
            trial_count: 20,
        }
    }
}

/// Everything one run produces: the trial intervals and their coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// The computed trials, in ascending index order.
    pub trials: Vec<Trial>,
    /// Coverage of the true population mean across `trials`.
    pub coverage: CoverageResult,
}

/// A simulation session: owned population state plus an entropy source.
///
/// # Examples
/// ```
/// use intervalsim::simulator::{RunParams, Simulator};
/// let mut sim = Simulator::seeded(42);
/// let outcome = sim.run(&RunParams::default()).unwrap();
/// assert_eq!(outcome.trials.len(), 20);
/// assert_eq!(outcome.coverage.total, 20);
/// ```
#[derive(Debug)]
pub struct Simulator<R: Rng> {
    rng: R,
    population: Option<Population>,
}

impl Simulator<SmallRng> {
    /// Creates a deterministic session from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(create_rng(seed))
    }

    /// Creates a session backed by operating-system entropy.
    /// Runs are not reproducible.
    pub fn from_entropy() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Simulator<R> {
    /// Creates a session around a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            population: None,
        }
    }

    /// The current population, if one has been synthesized.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Synthesizes a fresh population, replacing any existing one
    /// wholesale.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidArgument`] for `size == 0`,
    /// non-finite `mean`, or `std_dev ≤ 0`; the existing population is
    /// left untouched on error.
    ///
    /// [`EngineError::InvalidArgument`]: crate::error::EngineError::InvalidArgument
    pub fn reset_population(
        &mut self,
        size: usize,
        mean: f64,
        std_dev: f64,
    ) -> Result<&Population> {
        let population = Population::synthesize(size, mean, std_dev, &mut self.rng)?;
        Ok(self.population.insert(population))
    }

    /// Runs one full simulation: resolve the critical value, produce
    /// `params.trial_count` interval trials, and aggregate coverage
    /// against the true population mean.
    ///
    /// If no population exists yet, the default one is synthesized
    /// first (10,000 values ~ N(3.5, 1.0)).
    ///
    /// # Errors
    /// Any parameter rejected by the underlying components is reported
    /// as-is; no partial results are produced.
    pub fn run(&mut self, params: &RunParams) -> Result<SimulationOutcome> {
        if self.population.is_none() {
            self.reset_population(
                DEFAULT_POPULATION_SIZE,
                DEFAULT_POPULATION_MEAN,
                DEFAULT_POPULATION_STD_DEV,
            )?;
        }

        let critical_value = critical::resolve_critical_value(params.confidence_level)?;

        let population = self
            .population
            .as_ref()
            .expect("population synthesized above");
        let trials = estimate::estimate(
            population,
            params.sample_size,
            critical_value,
            params.trial_count,
            &mut self.rng,
        )?;
        let coverage = coverage::aggregate(&trials, population.true_mean())?;

        Ok(SimulationOutcome { trials, coverage })
    }
}

// ============================================================================
// Tests
// ============================================================================
