//! Descriptive statistics and trend plots for the impact-survival dataset
//!
//! This crate ties the workspace together: it loads the dataset with
//! [`trend_table`], renders the three diagnostic figures with
//! [`trend_plot`], and computes and interprets the four moments of the
//! analyzed column with [`trend_core`]. The member crates are
//! re-exported so downstream code (and the integration tests) can reach
//! everything from one place.

use std::path::Path;

use tracing::info;

pub use trend_core::{describe, pearson, Moments, SkewShape, TailShape};
pub use trend_plot::{plot_categorical, plot_relational, plot_statistical};
pub use trend_table::{Column, ColumnKind, CorrelationMatrix, Table};

/// Input dataset, resolved against the working directory
pub const DATA_FILE: &str = "data.csv";
/// Output filename for the scatter figure
pub const RELATIONAL_PLOT_FILE: &str = "relational_plot.png";
/// Output filename for the box-plot figure
pub const CATEGORICAL_PLOT_FILE: &str = "categorical_plot.png";
/// Output filename for the pair-plot figure
pub const STATISTICAL_PLOT_FILE: &str = "statistical_plot.png";
/// The column whose moments are analyzed and reported
pub const ANALYSIS_COLUMN: &str = "Age";

/// Run the full analysis pipeline: load the dataset, compute the
/// numeric correlation matrix, render the three figures into `out_dir`,
/// and analyze [`ANALYSIS_COLUMN`].
///
/// Returns the textual output (correlation matrix followed by the
/// moments report) for the caller to print. Strictly linear: the first
/// failing step aborts the run.
pub fn run_analysis(data_path: &Path, out_dir: &Path) -> anyhow::Result<String> {
    info!(path = %data_path.display(), "loading dataset");
    let table = Table::from_csv_path(data_path)?;
    let correlations = table.correlation_matrix()?;

    plot_relational(&table, &out_dir.join(RELATIONAL_PLOT_FILE))?;
    plot_statistical(&table, &out_dir.join(STATISTICAL_PLOT_FILE))?;
    plot_categorical(&table, &out_dir.join(CATEGORICAL_PLOT_FILE))?;

    let moments = Moments::from_sample(table.numeric(ANALYSIS_COLUMN)?)?;
    let report = describe(&moments, ANALYSIS_COLUMN);
    info!(column = ANALYSIS_COLUMN, "analysis complete");

    Ok(format!("{correlations}\n{report}"))
}
