//! Pair-plot matrix over age, impact speed, and survival status

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;
use trend_table::Table;

use crate::{finite_bounds, PlotError, Result};

/// The columns covered by the pair plot, in panel order
const PAIR_COLUMNS: [&str; 3] = ["Age", "Speed_of_Impact", "Survived"];

/// Number of bins for the diagonal histograms
const HISTOGRAM_BINS: usize = 10;

/// Render the statistical figure: a 3×3 matrix of pairwise panels over
/// `Age`, `Speed_of_Impact`, and `Survived` — scatters off the
/// diagonal, histograms on it — under a figure-level title.
///
/// The figure is written to `output_path`, overwriting any existing
/// file. Fails if any of the three columns is absent.
pub fn plot_statistical(table: &Table, output_path: &Path) -> Result<()> {
    let mut series = Vec::with_capacity(PAIR_COLUMNS.len());
    for name in PAIR_COLUMNS {
        series.push(table.numeric(name)?);
    }

    let root = BitMapBackend::new(output_path, (1080, 1080)).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;
    let titled = root
        .titled(
            "Pair Plot: Age, Speed of Impact, and Survival Status",
            ("sans-serif", 30),
        )
        .map_err(PlotError::render)?;

    let panels = titled.split_evenly((3, 3));
    for (index, panel) in panels.iter().enumerate() {
        let (row, col) = (index / 3, index % 3);
        if row == col {
            draw_histogram(panel, PAIR_COLUMNS[row], series[row])?;
        } else {
            draw_scatter(
                panel,
                PAIR_COLUMNS[col],
                series[col],
                PAIR_COLUMNS[row],
                series[row],
            )?;
        }
    }

    root.present().map_err(PlotError::render)?;
    info!(path = %output_path.display(), "wrote statistical plot");
    Ok(())
}

fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    name: &str,
    values: &[f64],
) -> Result<()> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(PlotError::EmptyColumn(name.to_string()));
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let bin_width = (hi - lo) / HISTOGRAM_BINS as f64;

    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for &v in &finite {
        let bin = (((v - lo) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(0) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(name, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(36)
        .build_cartesian_2d(lo..hi, 0.0..max_count * 1.05)
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_labels(4)
        .y_labels(4)
        .label_style(("sans-serif", 12))
        .draw()
        .map_err(PlotError::render)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = lo + i as f64 * bin_width;
            Rectangle::new(
                [(x0, 0.0), (x0 + bin_width, count as f64)],
                BLUE.mix(0.5).filled(),
            )
        }))
        .map_err(PlotError::render)?;
    Ok(())
}

fn draw_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x_name: &str,
    x_values: &[f64],
    y_name: &str,
    y_values: &[f64],
) -> Result<()> {
    let points: Vec<(f64, f64)> = x_values
        .iter()
        .zip(y_values.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();
    let (x_min, x_max) = finite_bounds(x_name, x_values)?;
    let (y_min, y_max) = finite_bounds(y_name, y_values)?;

    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(36)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc(x_name)
        .y_desc(y_name)
        .x_labels(4)
        .y_labels(4)
        .label_style(("sans-serif", 12))
        .axis_desc_style(("sans-serif", 13))
        .draw()
        .map_err(PlotError::render)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 2, BLUE.mix(0.6).filled())),
        )
        .map_err(PlotError::render)?;
    Ok(())
}
