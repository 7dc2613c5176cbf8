//! Box plot of age grouped by survival status

use std::path::Path;

use plotters::prelude::*;
use tracing::info;
use trend_table::Table;

use crate::{finite_bounds, PlotError, Result, FIGURE_SIZE};

/// Render the categorical figure: a box plot of the `Age` distribution
/// for each distinct value of `Survived`, with axis labels, a title,
/// and a grid.
///
/// `Survived` is treated as a discrete grouping key; groups appear on
/// the x-axis in ascending key order. The figure is written to
/// `output_path`, overwriting any existing file.
pub fn plot_categorical(table: &Table, output_path: &Path) -> Result<()> {
    let survived = table.numeric("Survived")?;
    let age = table.numeric("Age")?;

    // Rows with a missing key or value are dropped
    let mut groups: Vec<(f64, Vec<f64>)> = Vec::new();
    for (&key, &value) in survived.iter().zip(age.iter()) {
        if !key.is_finite() || !value.is_finite() {
            continue;
        }
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => groups.push((key, vec![value])),
        }
    }
    groups.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    if groups.is_empty() {
        return Err(PlotError::EmptyColumn("Survived".to_string()));
    }

    let labels: Vec<String> = groups.iter().map(|(key, _)| format_key(*key)).collect();
    let (y_min, y_max) = finite_bounds("Age", age)?;

    let root = BitMapBackend::new(output_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Box Plot: Age Distribution by Survival Status",
            ("sans-serif", 32),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (0..groups.len()).into_segmented(),
            (y_min as f32)..(y_max as f32),
        )
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc("Survived (0 = No, 1 = Yes)")
        .y_desc("Age (years)")
        .label_style(("sans-serif", 18))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(PlotError::render)?;

    chart
        .draw_series(groups.iter().enumerate().map(|(i, (_, values))| {
            Boxplot::new_vertical(SegmentValue::CenterOf(i), &Quartiles::new(values))
                .width(50)
                .whisker_width(0.5)
                .style(BLUE.stroke_width(2))
        }))
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)?;
    info!(path = %output_path.display(), groups = groups.len(), "wrote categorical plot");
    Ok(())
}

/// Format a grouping key for the x-axis, dropping the fraction when the
/// key is a whole number (so 0/1 survival flags print as "0" and "1").
fn format_key(key: f64) -> String {
    if key.fract() == 0.0 {
        format!("{}", key as i64)
    } else {
        format!("{key}")
    }
}
