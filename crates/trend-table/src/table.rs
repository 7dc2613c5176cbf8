//! The in-memory table and its typed column accessors

use crate::{ColumnKind, Error, Result};

/// Cell storage for one column, matching its [`ColumnKind`] tag.
#[derive(Debug, Clone)]
pub(crate) enum ColumnValues {
    /// Numeric and boolean columns; empty cells are NaN
    Numeric(Vec<f64>),
    /// Categorical columns, kept as raw strings
    Text(Vec<String>),
}

/// One named, typed column of the table.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    values: ColumnValues,
}

impl Column {
    pub(crate) fn new(name: String, kind: ColumnKind, values: ColumnValues) -> Self {
        Self { name, kind, values }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The column's values as floats, if it is numeric or boolean.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match &self.values {
            ColumnValues::Numeric(v) => Some(v),
            ColumnValues::Text(_) => None,
        }
    }
}

/// An ordered collection of named columns, rows aligned by position.
///
/// Loaded once from CSV and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub(crate) fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// Look up a column by name and require it to be numeric (or
    /// boolean). Fails fast with a typed error otherwise.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        let column = self.column(name)?;
        column.as_numeric().ok_or(Error::TypeMismatch {
            column: column.name.clone(),
            expected: "numeric",
            got: column.kind,
        })
    }

    /// The numeric-tagged columns, in table order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| c.kind.is_numeric())
            .collect()
    }
}
