//! Column type tags and inference from raw CSV cells

use std::fmt;

/// The concrete type tag a column is declared with at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-empty cell parses as a float; empty cells load as NaN
    Numeric,
    /// Numeric with every present value in {0, 1}; usable both as a
    /// numeric attribute and as a discrete grouping key
    Boolean,
    /// Anything else; stored as strings and excluded from numeric
    /// reductions
    Categorical,
}

impl ColumnKind {
    /// Whether the column participates in numeric reductions
    /// (correlation, moments). Booleans count as numeric.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Categorical)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Boolean => write!(f, "boolean"),
            Self::Categorical => write!(f, "categorical"),
        }
    }
}

/// Infer a column's kind from its raw cells.
///
/// A single unparseable non-empty cell makes the whole column
/// categorical. A column whose present values all parse and all lie in
/// {0, 1} is boolean. An all-empty column is numeric (a column of NaNs).
pub(crate) fn infer_kind(cells: &[String]) -> ColumnKind {
    let mut saw_value = false;
    let mut all_binary = true;

    for cell in cells {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(v) => {
                saw_value = true;
                if v != 0.0 && v != 1.0 {
                    all_binary = false;
                }
            }
            Err(_) => return ColumnKind::Categorical,
        }
    }

    if saw_value && all_binary {
        ColumnKind::Boolean
    } else {
        ColumnKind::Numeric
    }
}
