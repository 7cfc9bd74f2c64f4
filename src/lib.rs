//! # intervalsim
//!
//! A confidence interval coverage simulation engine.
//!
//! The crate repeatedly draws random samples from a synthetic normal
//! population, computes a two-sided confidence interval for each
//! sample, and scores how often the intervals contain the true
//! population mean — the classic demonstration that a "95% interval"
//! is a statement about long-run frequency, not about any one interval.
//!
//! Rendering, input handling, and anything else user-facing is a
//! caller concern; this crate is the computational core only.
//!
//! ## Modules
//!
//! - [`simulator`] — session state and the one-call-per-run entry point
//! - [`population`] — synthetic population generation and ownership
//! - [`critical`] — confidence level → critical value (z-score) resolution
//! - [`estimate`] — with-replacement sampling and interval estimation
//! - [`coverage`] — empirical coverage aggregation
//! - [`distributions`] — the normal distribution (moments, CDF, sampling)
//! - [`stats`] — numerically stable means and variances
//! - [`random`] — seeded RNG construction and Box–Muller draws
//! - [`special`] — standard normal CDF / inverse CDF approximations
//! - [`error`] — crate-wide error taxonomy
//!
//! ## Design Philosophy
//!
//! - **Fail fast**: invalid parameters are rejected with a named error
//!   before any computation; the engine never emits NaN-bearing output
//! - **Numerical stability first**: Kahan summation for means,
//!   Welford's algorithm for variance
//! - **Injectable entropy**: every sampling path takes `&mut impl Rng`,
//!   so seeded runs are exactly reproducible
//!
//! ## Example
//!
//! ```
//! use intervalsim::simulator::{RunParams, Simulator};
//!
//! let mut sim = Simulator::seeded(42);
//! let outcome = sim.run(&RunParams::default()).unwrap();
//! for trial in &outcome.trials {
//!     assert!(trial.lower <= trial.mean && trial.mean <= trial.upper);
//! }
//! println!(
//!     "{}/{} intervals contained the true mean",
//!     outcome.coverage.covered, outcome.coverage.total
//! );
//! ```

pub mod coverage;
pub mod critical;
pub mod distributions;
pub mod error;
pub mod estimate;
pub mod population;
pub mod random;
pub mod simulator;
pub mod special;
pub mod stats;

pub use error::{EngineError, Result};
pub use simulator::{RunParams, SimulationOutcome, Simulator};
