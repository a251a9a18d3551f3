//! Ordinary least-squares line fitting.
//!
//! - [`least_squares`] — fit `y = intercept + slope·x`
//! - [`fit_line`] — evaluate a fit at the extremes of the x domain
//! - [`residuals`] — vertical residuals of a fit
//! - [`coefficient_of_determination`] — R² from residual variance

use corrkit_core::{CorrkitError, Result, Summarizable};

use crate::correlation::{covariance_with_means, validate_paired};
use crate::descriptive::{is_constant, mean_and_variance, variance};

/// Intercept and slope of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    /// Value of the line at `x = 0`.
    pub intercept: f64,
    /// Change in `y` per unit of `x`.
    pub slope: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        x * self.slope + self.intercept
    }

    /// See [`fit_line`].
    pub fn fit_line(&self, xs: &[f64]) -> Result<FittedLine> {
        fit_line(xs, self.intercept, self.slope)
    }

    /// See [`residuals`].
    pub fn residuals(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
        residuals(xs, ys, self.intercept, self.slope)
    }

    /// Coefficient of determination of this fit on `(xs, ys)`.
    pub fn r_squared(&self, xs: &[f64], ys: &[f64]) -> Result<f64> {
        let res = self.residuals(xs, ys)?;
        coefficient_of_determination(ys, &res)
    }
}

impl Summarizable for LinearFit {
    fn summary(&self) -> String {
        format!(
            "LinearFit: intercept={:.4}, slope={:.4}",
            self.intercept, self.slope,
        )
    }
}

/// End points of a fitted line over the range of the fitted x values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FittedLine {
    /// `[min(xs), max(xs)]`.
    pub xs: [f64; 2],
    /// The line evaluated at each of `xs`.
    pub ys: [f64; 2],
}

/// Linear least-squares fit of `y` as a function of `x`.
///
/// `slope = cov(x, y) / var(x)` and `intercept = ȳ − slope·x̄`, both with
/// population (divisor `n`) moments.
///
/// # Errors
///
/// - [`CorrkitError::LengthMismatch`] if the lengths differ
/// - [`CorrkitError::EmptyInput`] if the inputs are empty
/// - [`CorrkitError::Domain`] if `x` is constant
///
/// # Example
///
/// ```
/// use corrkit_stats::regression::least_squares;
///
/// let fit = least_squares(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
/// assert!(fit.intercept.abs() < 1e-12);
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// ```
pub fn least_squares(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    validate_paired("least_squares", x, y, 1)?;

    let (xbar, var_x) = mean_and_variance(x)?;
    let (ybar, _) = mean_and_variance(y)?;
    if is_constant(x) || var_x == 0.0 {
        return Err(CorrkitError::domain("least_squares: x is constant"));
    }

    let slope = covariance_with_means(x, y, xbar, ybar)? / var_x;
    let intercept = ybar - slope * xbar;
    tracing::trace!(n = x.len(), intercept, slope, "least_squares fit");

    Ok(LinearFit { intercept, slope })
}

/// The line `intercept + slope·x` evaluated at `min(x)` and `max(x)`.
///
/// A single-element `x` yields two coincident points.
///
/// # Errors
///
/// Returns [`CorrkitError::EmptyInput`] if `x` is empty and
/// [`CorrkitError::Domain`] if it contains NaN, which has no place on the
/// x axis.
pub fn fit_line(x: &[f64], intercept: f64, slope: f64) -> Result<FittedLine> {
    if x.is_empty() {
        return Err(CorrkitError::EmptyInput {
            op: "fit_line",
            needed: 1,
            got: 0,
        });
    }
    if x.iter().any(|v| v.is_nan()) {
        return Err(CorrkitError::domain("fit_line: x contains NaN"));
    }
    let lo = x.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let fit = LinearFit { intercept, slope };
    Ok(FittedLine {
        xs: [lo, hi],
        ys: [fit.predict(lo), fit.predict(hi)],
    })
}

/// Residuals `yᵢ − intercept − slope·xᵢ` for each pair.
pub fn residuals(x: &[f64], y: &[f64], intercept: f64, slope: f64) -> Result<Vec<f64>> {
    validate_paired("residuals", x, y, 0)?;
    Ok(x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| yi - intercept - slope * xi)
        .collect())
}

/// Coefficient of determination, `1 − var(residuals) / var(y)`.
///
/// This uses the variance of the residuals, not their raw sum of squares.
/// The two agree for ordinary least-squares residuals, whose mean is zero;
/// for arbitrary residuals the mean offset is ignored.
///
/// # Errors
///
/// Returns [`CorrkitError::EmptyInput`] if either input is empty and
/// [`CorrkitError::Domain`] if `y` is constant.
pub fn coefficient_of_determination(y: &[f64], residuals: &[f64]) -> Result<f64> {
    let var_y = variance(y)?;
    let var_res = variance(residuals)?;
    if is_constant(y) || var_y == 0.0 {
        return Err(CorrkitError::domain("coefficient_of_determination: y is constant"));
    }
    Ok(1.0 - var_res / var_y)
}

// ── Tests ──────────────────────────────────────────────────────────────────
