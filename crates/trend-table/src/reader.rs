//! CSV loading with per-column type inference

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::schema::infer_kind;
use crate::table::ColumnValues;
use crate::{Column, ColumnKind, Result, Table};

impl Table {
    /// Load a comma-delimited table with a header row from a file.
    ///
    /// I/O and parse failures propagate unchanged; there is no retry or
    /// fallback path.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            rows = table.n_rows(),
            columns = table.n_columns(),
            "loaded dataset"
        );
        Ok(table)
    }

    /// Load a comma-delimited table with a header row from any reader.
    ///
    /// Cells are gathered column-wise, each column's kind is inferred
    /// from its raw cells, and the column is materialized under that
    /// tag. Ragged rows are a parse error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in csv_reader.records() {
            let record = record?;
            for (cells, cell) in raw_columns.iter_mut().zip(record.iter()) {
                cells.push(cell.to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw_columns)
            .map(|(name, cells)| {
                let kind = infer_kind(&cells);
                let values = match kind {
                    ColumnKind::Numeric | ColumnKind::Boolean => ColumnValues::Numeric(
                        cells
                            .iter()
                            .map(|cell| cell.trim().parse::<f64>().unwrap_or(f64::NAN))
                            .collect(),
                    ),
                    ColumnKind::Categorical => ColumnValues::Text(cells),
                };
                Column::new(name, kind, values)
            })
            .collect();

        Ok(Table::new(columns))
    }
}
