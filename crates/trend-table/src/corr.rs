//! Pairwise Pearson correlation over the numeric columns

use std::fmt;

use tracing::debug;
use trend_core::pearson;

use crate::{Error, Result, Table};

/// The pairwise Pearson correlation matrix of a table's numeric columns.
///
/// Holds one row/column per numeric column, in table order. Degenerate
/// pairs (zero variance, fewer than two complete rows) hold NaN. The
/// `Display` impl renders the labeled matrix the driver prints to
/// stdout.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Correlation between the i-th and j-th numeric columns.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

impl Table {
    /// Compute the Pearson correlation matrix across exactly the
    /// numeric-tagged columns. The table itself is left untouched.
    ///
    /// Errors if the table has no numeric columns.
    pub fn correlation_matrix(&self) -> Result<CorrelationMatrix> {
        let columns = self.numeric_columns();
        if columns.is_empty() {
            return Err(Error::NoNumericColumns);
        }

        let labels: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
        let series: Vec<&[f64]> = columns
            .iter()
            .map(|c| c.as_numeric().unwrap_or(&[]))
            .collect();

        let n = series.len();
        let mut values = vec![vec![f64::NAN; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = pearson(series[i], series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        debug!(columns = n, "computed correlation matrix");
        Ok(CorrelationMatrix { labels, values })
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .values
            .iter()
            .map(|row| row.iter().map(|v| format!("{v:.6}")).collect())
            .collect();

        let index_width = self.labels.iter().map(String::len).max().unwrap_or(0);
        let col_widths: Vec<usize> = self
            .labels
            .iter()
            .enumerate()
            .map(|(j, label)| {
                cells
                    .iter()
                    .map(|row| row[j].len())
                    .chain(std::iter::once(label.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (label, &width) in self.labels.iter().zip(&col_widths) {
            write!(f, "  {label:>width$}")?;
        }
        for (label, row) in self.labels.iter().zip(&cells) {
            write!(f, "\n{label:<index_width$}")?;
            for (cell, &width) in row.iter().zip(&col_widths) {
                write!(f, "  {cell:>width$}")?;
            }
        }
        Ok(())
    }
}
