//! Shared primitives for the corrkit statistics crates.
//!
//! `corrkit-core` provides the foundation the other corrkit crates build on:
//!
//! - **Error types** — [`CorrkitError`] and [`Result`] for structured error handling
//! - **Traits** — [`Summarizable`] for one-line summaries of result types

pub mod error;
pub mod traits;

pub use error::{CorrkitError, Result};
pub use traits::*;
