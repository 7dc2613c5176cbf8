//! Empirical moments and Pearson correlation
//!
//! One-pass-per-moment reductions over a slice of `f64`. NaN cells (the
//! loader's representation of empty CSV fields) are skipped before any
//! moment is computed, matching how pandas-style reductions treat missing
//! values.

use crate::{Error, Result};

/// The four empirical moments of one column's distribution.
///
/// Immutable once computed; consumed by [`crate::describe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator)
    pub std_dev: f64,
    /// Biased third-standardized-moment skewness, `m3 / m2^1.5`
    pub skewness: f64,
    /// Excess kurtosis, `m4 / m2^2 − 3`
    pub excess_kurtosis: f64,
}

impl Moments {
    /// Compute the four moments of a sample.
    ///
    /// Non-finite values are dropped first. A constant sample yields a
    /// standard deviation of 0 and NaN skewness/kurtosis (the
    /// standardized moments are undefined with zero spread). A sample
    /// with no finite values is an error.
    pub fn from_sample(values: &[f64]) -> Result<Self> {
        let clean: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if clean.is_empty() {
            return Err(Error::empty_sample());
        }

        let n = clean.len() as f64;
        let mean = clean.iter().sum::<f64>() / n;

        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for &x in &clean {
            let d = x - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }
        m2 /= n;
        m3 /= n;
        m4 /= n;

        let std_dev = if clean.len() > 1 {
            (clean.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            f64::NAN
        };

        let (skewness, excess_kurtosis) = if m2 > 0.0 {
            (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
        } else {
            (f64::NAN, f64::NAN)
        };

        Ok(Self {
            mean,
            std_dev,
            skewness,
            excess_kurtosis,
        })
    }
}

/// Pearson correlation coefficient between two equal-length samples.
///
/// Rows where either value is non-finite are dropped pairwise. Returns
/// NaN when fewer than two complete pairs remain or when either sample
/// has zero variance, mirroring what pandas prints in its correlation
/// matrix for degenerate columns.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for &(a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x * var_y).sqrt()
}
