//! Diagnostic figures for the impact-survival dataset
//!
//! Three independent generators, each consuming a [`trend_table::Table`]
//! and a caller-supplied output path:
//! - [`plot_relational`] — scatter of `Speed_of_Impact` against `Age`
//! - [`plot_categorical`] — box plot of `Age` grouped by `Survived`
//! - [`plot_statistical`] — 3×3 pairwise panel matrix over `Age`,
//!   `Speed_of_Impact`, and `Survived`
//!
//! Figures are rendered with the [`plotters`] bitmap backend and saved
//! as PNG, overwriting any existing file at the target path. Each
//! generator owns its drawing area for the duration of one call: the
//! area is created, drawn into, presented, and dropped before the
//! function returns, so no figure state leaks between calls. Rendering
//! uses default fonts so it works in headless environments.

mod categorical;
mod error;
mod relational;
mod statistical;

pub use categorical::plot_categorical;
pub use error::{PlotError, Result};
pub use relational::plot_relational;
pub use statistical::plot_statistical;

/// Fixed resolution for the single-chart figures
pub(crate) const FIGURE_SIZE: (u32, u32) = (1200, 800);

/// Padded axis range over the finite values of a column.
///
/// A constant column gets a unit-wide window around its value so the
/// chart still has a valid coordinate range. Errors when the column has
/// no finite values at all.
pub(crate) fn finite_bounds(name: &str, values: &[f64]) -> Result<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo > hi {
        return Err(PlotError::EmptyColumn(name.to_string()));
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let pad = (hi - lo) * 0.05;
    Ok((lo - pad, hi + pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_bounds_pads_the_range() {
        let (lo, hi) = finite_bounds("x", &[10.0, 50.0, f64::NAN]).unwrap();
        assert!(lo < 10.0 && hi > 50.0);
    }

    #[test]
    fn test_finite_bounds_handles_constant_columns() {
        let (lo, hi) = finite_bounds("x", &[3.0, 3.0]).unwrap();
        assert!(lo < 3.0 && 3.0 < hi);
    }

    #[test]
    fn test_finite_bounds_rejects_all_nan() {
        assert!(matches!(
            finite_bounds("x", &[f64::NAN]),
            Err(PlotError::EmptyColumn(_))
        ));
    }
}
