//! Correlation and regression statistics for paired numeric samples.
//!
//! - **Moment statistics** — [`descriptive::mean`], [`descriptive::variance`]
//!   (population, divisor `n`)
//! - **Correlation** — covariance, Pearson, serial (lag-1) and Spearman
//!   rank correlation
//! - **Ranking** — ordinal ranks with ties broken by position
//! - **Regression** — least-squares line fits, residuals, R²
//! - **Generators** — endless AR(1) normal sequences with a target serial
//!   correlation
//!
//! Every fallible operation returns [`corrkit_core::Result`]; undefined
//! results such as the correlation of a constant series are errors, never NaN.

pub mod correlation;
pub mod descriptive;
pub mod generator;
pub mod rank;
pub mod regression;

pub use correlation::{
    correlation, covariance, covariance_with_means, serial_correlation, spearman_correlation,
};
pub use descriptive::{is_constant, mean, mean_and_variance, std_dev, variance};
pub use generator::{correlated_generator, correlated_normal, CorrelatedGenerator, CorrelatedNormal};
pub use rank::map_to_ranks;
pub use regression::{
    coefficient_of_determination, fit_line, least_squares, residuals, FittedLine, LinearFit,
};
