//! Tagged-schema tabular data for the impact-trends workspace
//!
//! A [`Table`] is an ordered collection of named columns loaded once from
//! a CSV file and never mutated afterwards. Each column carries an
//! explicit [`ColumnKind`] tag assigned at load time, so consumers can
//! validate the columns they need up front and fail with a typed error
//! instead of hitting a late runtime type error.
//!
//! # Example
//!
//! ```rust
//! use trend_table::Table;
//!
//! let csv = "Age,Survived\n34,1\n51,0\n28,1\n";
//! let table = Table::from_reader(csv.as_bytes()).unwrap();
//! let ages = table.numeric("Age").unwrap();
//! assert_eq!(ages.len(), 3);
//! println!("{}", table.correlation_matrix().unwrap());
//! ```

mod corr;
mod error;
mod reader;
mod schema;
mod table;

pub use corr::CorrelationMatrix;
pub use error::{Error, Result};
pub use schema::ColumnKind;
pub use table::{Column, Table};
