//! Moment statistics for numeric samples.
//!
//! All variances here are population variances (divisor `n`, not `n - 1`).
//! The correlation and regression modules rely on that convention: their
//! covariances divide by `n` as well, so the ratios they form are exact.

use corrkit_core::{CorrkitError, Result};

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    require_nonempty("mean", data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance, `(1/n)·Σ(xᵢ − x̄)²`.
pub fn variance(data: &[f64]) -> Result<f64> {
    Ok(mean_and_variance(data)?.1)
}

/// Population standard deviation.
pub fn std_dev(data: &[f64]) -> Result<f64> {
    Ok(variance(data)?.sqrt())
}

/// Mean and population variance in one call.
///
/// # Example
///
/// ```
/// use corrkit_stats::descriptive::mean_and_variance;
///
/// let (m, v) = mean_and_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((m - 3.0).abs() < 1e-12);
/// assert!((v - 2.0).abs() < 1e-12);
/// ```
pub fn mean_and_variance(data: &[f64]) -> Result<(f64, f64)> {
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    Ok((m, ss / data.len() as f64))
}

/// Whether every value in `data` equals the first one.
///
/// Decided from the values themselves: the computed variance of a constant
/// sample such as `[0.1; 3]` is a tiny positive number, not `0.0`, because
/// the mean is rounded. Empty input counts as constant; a sample holding NaN
/// does not.
pub fn is_constant(data: &[f64]) -> bool {
    match data.first() {
        Some(&first) => data.iter().all(|&v| v == first),
        None => true,
    }
}

fn require_nonempty(op: &'static str, data: &[f64]) -> Result<()> {
    if data.is_empty() {
        return Err(CorrkitError::EmptyInput {
            op,
            needed: 1,
            got: 0,
        });
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────
