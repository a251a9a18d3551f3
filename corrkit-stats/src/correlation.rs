//! Covariance and correlation analysis.
//!
//! Provides population covariance, Pearson correlation, lag-1 serial
//! correlation and Spearman rank correlation. Undefined results (a constant
//! series, too few observations) are reported as errors rather than NaN.

use corrkit_core::{CorrkitError, Result};

use crate::descriptive::{is_constant, mean, mean_and_variance};
use crate::rank::ranks_as_f64;

/// Population covariance `(1/n)·Σ(xᵢ − x̄)(yᵢ − ȳ)` of paired samples.
pub fn covariance(x: &[f64], y: &[f64]) -> Result<f64> {
    validate_paired("covariance", x, y, 1)?;
    covariance_with_means(x, y, mean(x)?, mean(y)?)
}

/// Covariance of `x` and `y` about caller-supplied means `mux` and `muy`.
///
/// Useful when the means are already known; the result is
/// `(1/n)·Σ(xᵢ − mux)(yᵢ − muy)`.
pub fn covariance_with_means(x: &[f64], y: &[f64], mux: f64, muy: f64) -> Result<f64> {
    validate_paired("covariance", x, y, 1)?;
    let total: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (xi - mux) * (yi - muy))
        .sum();
    Ok(total / x.len() as f64)
}

/// Pearson product-moment correlation coefficient between `x` and `y`.
///
/// # Errors
///
/// - [`CorrkitError::LengthMismatch`] if the lengths differ
/// - [`CorrkitError::EmptyInput`] with fewer than 2 observations
/// - [`CorrkitError::Domain`] if either series is constant
///
/// # Example
///
/// ```
/// use corrkit_stats::correlation::correlation;
///
/// let r = correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    validate_paired("correlation", x, y, 2)?;

    let (xbar, var_x) = mean_and_variance(x)?;
    let (ybar, var_y) = mean_and_variance(y)?;
    if is_constant(x) || is_constant(y) || var_x == 0.0 || var_y == 0.0 {
        return Err(CorrkitError::domain(
            "correlation: undefined for a constant series (zero variance)",
        ));
    }

    Ok(covariance_with_means(x, y, xbar, ybar)? / (var_x * var_y).sqrt())
}

/// Lag-1 serial correlation: the correlation of `data[..n-1]` with `data[1..]`.
///
/// Requires at least 2 observations. Each shifted window is then subject to
/// the [`correlation`] preconditions, so in practice 3 or more values are
/// needed for a defined result.
pub fn serial_correlation(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(CorrkitError::EmptyInput {
            op: "serial_correlation",
            needed: 2,
            got: data.len(),
        });
    }
    let n = data.len();
    correlation(&data[..n - 1], &data[1..])
}

/// Spearman rank correlation coefficient between `x` and `y`.
///
/// Ranks both series with ordinal ranks (ties broken by position, see
/// [`crate::rank::map_to_ranks`]), then computes Pearson correlation on the
/// ranks.
pub fn spearman_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    validate_paired("spearman_correlation", x, y, 2)?;
    let rx = ranks_as_f64(x);
    let ry = ranks_as_f64(y);
    correlation(&rx, &ry)
}

pub(crate) fn validate_paired(
    op: &'static str,
    x: &[f64],
    y: &[f64],
    needed: usize,
) -> Result<()> {
    if x.len() != y.len() {
        return Err(CorrkitError::LengthMismatch {
            op,
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < needed {
        return Err(CorrkitError::EmptyInput {
            op,
            needed,
            got: x.len(),
        });
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────
