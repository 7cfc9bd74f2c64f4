//! The normal distribution.
//!
//! The engine synthesizes populations from a single parametric family:
//! the normal (Gaussian) distribution N(μ, σ²). Analytical moments,
//! CDF/inverse-CDF evaluation, and random sampling live here; the
//! numerical approximations behind the CDF and quantile are in
//! [`crate::special`].

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::random::standard_normal;
use crate::special;

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Mathematical Definition
/// - PDF: φ(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
/// - CDF: Φ((x−μ)/σ) (via standard normal CDF)
/// - Mean: μ
/// - Variance: σ²
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a new normal distribution N(μ, σ).
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidArgument`] if `sigma ≤ 0` or either
    /// parameter is not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(EngineError::InvalidArgument(format!(
                "Normal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    pub fn std_dev(&self) -> f64 {
        self.sigma
    }

    /// Draws one random sample: μ + σ·Z with Z ~ N(0, 1) via Box–Muller.
    ///
    /// # Examples
    /// ```
    /// use intervalsim::distributions::Normal;
    /// use intervalsim::random::create_rng;
    /// let n = Normal::new(3.5, 1.0).unwrap();
    /// let mut rng = create_rng(42);
    /// let x = n.sample(&mut rng);
    /// assert!(x.is_finite());
    /// ```
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.mu + self.sigma * standard_normal(rng)
    }

    /// PDF: (1/(σ√(2π))) exp(−(x−μ)²/(2σ²)).
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        special::standard_normal_pdf(z) / self.sigma
    }

    /// CDF: Φ((x−μ)/σ).
    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        special::standard_normal_cdf(z)
    }

    /// Inverse CDF (quantile): μ + σ·Φ⁻¹(p).
    ///
    /// Returns `None` if `p` is outside `(0, 1)`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if p <= 0.0 || p >= 1.0 {
            return None;
        }
        Some(self.mu + self.sigma * special::inverse_normal_cdf(p))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::stats;

    #[test]
    fn test_normal_standard() {
        let n = Normal::new(0.0, 1.0).unwrap();
        assert!((n.mean()).abs() < 1e-15);
        assert!((n.variance() - 1.0).abs() < 1e-15);
        assert!((n.cdf(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_normal_shifted() {
        let n = Normal::new(10.0, 2.0).unwrap();
        assert!((n.mean() - 10.0).abs() < 1e-15);
        assert!((n.variance() - 4.0).abs() < 1e-15);
        assert!((n.std_dev() - 2.0).abs() < 1e-15);
        assert!((n.cdf(10.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_normal_quantile() {
        let n = Normal::new(0.0, 1.0).unwrap();
        assert!((n.quantile(0.5).unwrap()).abs() < 0.01);
        assert!((n.quantile(0.975).unwrap() - 1.96).abs() < 0.01);
        assert_eq!(n.quantile(0.0), None);
        assert_eq!(n.quantile(1.0), None);
    }

    #[test]
    fn test_normal_invalid() {
        assert!(matches!(
            Normal::new(0.0, 0.0),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_sample_moments() {
        // 50,000 draws from N(3.5, 1.0): sample mean std error ≈ 0.0045.
        let n = Normal::new(3.5, 1.0).unwrap();
        let mut rng = create_rng(42);
        let draws: Vec<f64> = (0..50_000).map(|_| n.sample(&mut rng)).collect();
        let m = stats::mean(&draws).unwrap();
        let sd = stats::std_dev(&draws).unwrap();
        assert!((m - 3.5).abs() < 0.03, "sample mean: {m}");
        assert!((sd - 1.0).abs() < 0.03, "sample std dev: {sd}");
    }

    #[test]
    fn test_sample_scales_with_sigma() {
        // Same seed, different σ: draws are an affine transform of Z.
        let narrow = Normal::new(0.0, 1.0).unwrap();
        let wide = Normal::new(0.0, 5.0).unwrap();
        let mut rng1 = create_rng(7);
        let mut rng2 = create_rng(7);
        for _ in 0..100 {
            let a = narrow.sample(&mut rng1);
            let b = wide.sample(&mut rng2);
            assert!((b - 5.0 * a).abs() < 1e-12, "σ should scale draws linearly");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn cdf_in_01(
            mu in -100.0_f64..100.0,
            sigma in 0.1_f64..50.0,
            x in -500.0_f64..500.0,
        ) {
            let n = Normal::new(mu, sigma).unwrap();
            let c = n.cdf(x);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn quantile_cdf_roundtrip(
            mu in -50.0_f64..50.0,
            sigma in 0.1_f64..20.0,
            p in 0.01_f64..0.99,
        ) {
            let n = Normal::new(mu, sigma).unwrap();
            let x = n.quantile(p).unwrap();
            let p_back = n.cdf(x);
            // Combined A&S approximation error.
            prop_assert!((p_back - p).abs() < 2e-3, "roundtrip: p={} -> x={} -> p_back={}", p, x, p_back);
        }

        #[test]
        fn samples_finite(
            mu in -100.0_f64..100.0,
            sigma in 0.1_f64..50.0,
            seed in 0_u64..10_000,
        ) {
            let n = Normal::new(mu, sigma).unwrap();
            let mut rng = crate::random::create_rng(seed);
            for _ in 0..20 {
                prop_assert!(n.sample(&mut rng).is_finite());
            }
        }
    }
}
