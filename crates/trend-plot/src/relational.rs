//! Scatter plot of impact speed against age

use std::path::Path;

use plotters::prelude::*;
use tracing::info;
use trend_table::Table;

use crate::{finite_bounds, PlotError, Result, FIGURE_SIZE};

/// Render the relational figure: a scatter of `Speed_of_Impact` (x)
/// against `Age` (y) with semi-transparent markers, axis labels, a
/// title, and a grid.
///
/// The figure is written to `output_path`, overwriting any existing
/// file. Fails if either column is absent or holds no finite values.
pub fn plot_relational(table: &Table, output_path: &Path) -> Result<()> {
    let speed = table.numeric("Speed_of_Impact")?;
    let age = table.numeric("Age")?;

    let points: Vec<(f64, f64)> = speed
        .iter()
        .zip(age.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect();
    let (x_min, x_max) = finite_bounds("Speed_of_Impact", speed)?;
    let (y_min, y_max) = finite_bounds("Age", age)?;

    let root = BitMapBackend::new(output_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Scatter Plot: Speed of Impact vs Age", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc("Speed of Impact (km/h)")
        .y_desc("Age (years)")
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(PlotError::render)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.mix(0.7).filled())),
        )
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)?;
    info!(path = %output_path.display(), points = points.len(), "wrote relational plot");
    Ok(())
}
