//! Core statistical routines for the impact-trends workspace
//!
//! This crate provides the numeric building blocks shared by the rest of
//! the workspace:
//! - empirical moments of a sample ([`Moments`]): mean, sample standard
//!   deviation, skewness, and excess kurtosis
//! - Pearson correlation between two samples ([`pearson`])
//! - sign-based classification of a distribution's shape
//!   ([`SkewShape`], [`TailShape`]) and the textual report built from it
//!
//! # Estimator conventions
//!
//! The standard deviation uses the sample (n − 1) denominator. Skewness
//! and excess kurtosis use the biased moment estimators `g1 = m3 / m2^1.5`
//! and `g2 = m4 / m2^2 − 3`, so a normal distribution scores ≈ 0 on both.
//!
//! # Example
//!
//! ```rust
//! use trend_core::{describe, Moments};
//!
//! let moments = Moments::from_sample(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
//! assert_eq!(moments.mean, 30.0);
//! println!("{}", describe(&moments, "Age"));
//! ```

mod classify;
mod error;
mod moments;
mod report;

pub use classify::{SkewShape, TailShape};
pub use error::{Error, Result};
pub use moments::{pearson, Moments};
pub use report::describe;
