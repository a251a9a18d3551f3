//! Normal sequences with a prescribed serial correlation.
//!
//! [`CorrelatedGenerator`] is an endless iterator over a first-order
//! autoregressive process,
//!
//! ```text
//! x₀ ~ N(0, 1)
//! xₙ ~ N(ρ·xₙ₋₁, √(1 − ρ²))
//! ```
//!
//! whose marginal distribution stays standard normal and whose lag-1
//! correlation is `ρ`. [`CorrelatedNormal`] rescales it to mean `mu` and
//! standard deviation `sigma`, which leaves the correlation unchanged.
//!
//! Each generator owns its random source and is consumed through
//! `&mut self`; it cannot be rewound. Build a new one for a fresh stream.

use std::iter::FusedIterator;

use corrkit_core::{CorrkitError, Result};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cursor {
    /// No value emitted yet; the next pull draws x₀.
    Seed,
    /// Holds the last emitted value.
    Streaming(f64),
}

/// Standard normal variates with lag-1 correlation `rho`.
///
/// # Example
///
/// ```
/// use corrkit_stats::generator::CorrelatedGenerator;
///
/// let xs: Vec<f64> = CorrelatedGenerator::seeded(0.5, 7).unwrap().take(100).collect();
/// assert_eq!(xs.len(), 100);
/// ```
#[derive(Debug)]
pub struct CorrelatedGenerator<R> {
    rng: R,
    rho: f64,
    noise_sd: f64,
    cursor: Cursor,
}

impl<R: Rng> CorrelatedGenerator<R> {
    /// Create a generator drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`CorrkitError::Domain`] unless `-1 < rho < 1`.
    pub fn new(rho: f64, rng: R) -> Result<Self> {
        if rho.is_nan() || rho <= -1.0 || rho >= 1.0 {
            return Err(CorrkitError::domain(format!(
                "correlated generator: rho must be in (-1, 1), got {rho}"
            )));
        }
        let noise_sd = (1.0 - rho * rho).sqrt();
        tracing::debug!(rho, noise_sd, "correlated generator created");
        Ok(Self {
            rng,
            rho,
            noise_sd,
            cursor: Cursor::Seed,
        })
    }

    /// Target lag-1 correlation.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Standard deviation of the innovation term, `√(1 − ρ²)`.
    pub fn noise_sd(&self) -> f64 {
        self.noise_sd
    }
}

impl CorrelatedGenerator<StdRng> {
    /// Reproducible generator seeded from `seed`.
    pub fn seeded(rho: f64, seed: u64) -> Result<Self> {
        Self::new(rho, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Iterator for CorrelatedGenerator<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        let x = match self.cursor {
            Cursor::Seed => z,
            Cursor::Streaming(prev) => self.rho * prev + self.noise_sd * z,
        };
        self.cursor = Cursor::Streaming(x);
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: Rng> FusedIterator for CorrelatedGenerator<R> {}

/// Normal variates with mean `mu`, standard deviation `sigma` and lag-1
/// correlation `rho`.
#[derive(Debug)]
pub struct CorrelatedNormal<R> {
    inner: CorrelatedGenerator<R>,
    mu: f64,
    sigma: f64,
}

impl<R: Rng> CorrelatedNormal<R> {
    /// Create a scaled generator drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`CorrkitError::Domain`] if `rho` is outside `(-1, 1)`, `mu`
    /// is not finite, or `sigma` is negative or not finite.
    pub fn new(mu: f64, sigma: f64, rho: f64, rng: R) -> Result<Self> {
        if !mu.is_finite() {
            return Err(CorrkitError::domain(format!(
                "correlated normal: mu must be finite, got {mu}"
            )));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(CorrkitError::domain(format!(
                "correlated normal: sigma must be finite and >= 0, got {sigma}"
            )));
        }
        Ok(Self {
            inner: CorrelatedGenerator::new(rho, rng)?,
            mu,
            sigma,
        })
    }

    /// Target lag-1 correlation.
    pub fn rho(&self) -> f64 {
        self.inner.rho()
    }

    /// Marginal mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Marginal standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl CorrelatedNormal<StdRng> {
    /// Reproducible scaled generator seeded from `seed`.
    pub fn seeded(mu: f64, sigma: f64, rho: f64, seed: u64) -> Result<Self> {
        Self::new(mu, sigma, rho, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Iterator for CorrelatedNormal<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.inner.next().map(|x| x * self.sigma + self.mu)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R: Rng> FusedIterator for CorrelatedNormal<R> {}

/// Standard normal variates with lag-1 correlation `rho`, drawn from the
/// thread-local RNG.
pub fn correlated_generator(rho: f64) -> Result<CorrelatedGenerator<ThreadRng>> {
    CorrelatedGenerator::new(rho, rand::rng())
}

/// Normal variates with mean `mu`, standard deviation `sigma` and lag-1
/// correlation `rho`, drawn from the thread-local RNG.
pub fn correlated_normal(mu: f64, sigma: f64, rho: f64) -> Result<CorrelatedNormal<ThreadRng>> {
    CorrelatedNormal::new(mu, sigma, rho, rand::rng())
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::serial_correlation;
    use crate::descriptive::mean_and_variance;

    const N: usize = 10_000;

    #[test]
    fn rejects_rho_outside_open_interval() {
        for rho in [1.0, -1.0, 1.5, -2.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(CorrelatedGenerator::seeded(rho, 1), Err(CorrkitError::Domain(_))),
                "rho = {rho} accepted"
            );
        }
    }

    #[test]
    fn noise_sd_matches_rho() {
        let g = CorrelatedGenerator::seeded(0.6, 1).unwrap();
        assert_eq!(g.rho(), 0.6);
        assert!((g.noise_sd() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn uncorrelated_stream() {
        let xs: Vec<f64> = CorrelatedGenerator::seeded(0.0, 42).unwrap().take(N).collect();
        let r = serial_correlation(&xs).unwrap();
        assert!(r.abs() < 0.05, "serial correlation {r}");
    }

    #[test]
    fn strongly_correlated_stream() {
        let xs: Vec<f64> = CorrelatedGenerator::seeded(0.9, 42).unwrap().take(N).collect();
        let r = serial_correlation(&xs).unwrap();
        assert!((r - 0.9).abs() < 0.05, "serial correlation {r}");
    }

    #[test]
    fn negatively_correlated_stream() {
        let xs: Vec<f64> = CorrelatedGenerator::seeded(-0.5, 3).unwrap().take(N).collect();
        let r = serial_correlation(&xs).unwrap();
        assert!((r + 0.5).abs() < 0.05, "serial correlation {r}");
    }

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<f64> = CorrelatedGenerator::seeded(0.3, 11).unwrap().take(50).collect();
        let b: Vec<f64> = CorrelatedGenerator::seeded(0.3, 11).unwrap().take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn stream_continues_after_take() {
        let mut g = CorrelatedGenerator::seeded(0.3, 11).unwrap();
        let head: Vec<f64> = g.by_ref().take(10).collect();
        let tail: Vec<f64> = g.take(10).collect();
        let whole: Vec<f64> = CorrelatedGenerator::seeded(0.3, 11).unwrap().take(20).collect();
        assert_eq!([head, tail].concat(), whole);
    }

    #[test]
    fn never_exhausted() {
        let mut g = CorrelatedGenerator::seeded(0.2, 5).unwrap();
        assert_eq!(g.size_hint(), (usize::MAX, None));
        assert!(g.nth(N).is_some());
    }

    #[test]
    fn scaled_stream_is_affine_in_standard_stream() {
        let base: Vec<f64> = CorrelatedGenerator::seeded(0.7, 9).unwrap().take(100).collect();
        let scaled: Vec<f64> = CorrelatedNormal::seeded(10.0, 3.0, 0.7, 9)
            .unwrap()
            .take(100)
            .collect();
        for (b, s) in base.iter().zip(scaled.iter()) {
            assert_eq!(*s, b * 3.0 + 10.0);
        }
    }

    #[test]
    fn scaled_stream_moments_and_correlation() {
        let g = CorrelatedNormal::seeded(5.0, 2.0, 0.5, 42).unwrap();
        assert_eq!((g.mu(), g.sigma(), g.rho()), (5.0, 2.0, 0.5));
        let xs: Vec<f64> = g.take(2 * N).collect();
        let (m, v) = mean_and_variance(&xs).unwrap();
        assert!((m - 5.0).abs() < 0.15, "mean {m}");
        assert!((v.sqrt() - 2.0).abs() < 0.1, "std dev {}", v.sqrt());
        let r = serial_correlation(&xs).unwrap();
        assert!((r - 0.5).abs() < 0.05, "serial correlation {r}");
    }

    #[test]
    fn zero_sigma_is_constant() {
        let xs: Vec<f64> = CorrelatedNormal::seeded(1.5, 0.0, 0.4, 1).unwrap().take(5).collect();
        assert_eq!(xs, vec![1.5; 5]);
    }

    #[test]
    fn scaled_rejects_bad_parameters() {
        assert!(CorrelatedNormal::seeded(0.0, -1.0, 0.5, 1).is_err());
        assert!(CorrelatedNormal::seeded(0.0, f64::NAN, 0.5, 1).is_err());
        assert!(CorrelatedNormal::seeded(f64::INFINITY, 1.0, 0.5, 1).is_err());
        assert!(CorrelatedNormal::seeded(0.0, 1.0, 1.0, 1).is_err());
    }

    #[test]
    fn thread_rng_constructors() {
        let xs: Vec<f64> = correlated_generator(0.5).unwrap().take(10).collect();
        assert!(xs.iter().all(|x| x.is_finite()));
        let ys: Vec<f64> = correlated_normal(100.0, 0.0, 0.5).unwrap().take(3).collect();
        assert_eq!(ys, vec![100.0; 3]);
        assert!(correlated_generator(-1.0).is_err());
    }
}
