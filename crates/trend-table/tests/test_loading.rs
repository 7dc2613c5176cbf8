//! Tests for CSV loading and schema inference

mod common;

use common::{crash_csv, table_from_str};
use trend_table::{ColumnKind, Error, Table};

#[test]
fn test_schema_tags_assigned_at_load() {
    let table = table_from_str(crash_csv());
    assert_eq!(table.n_rows(), 5);
    assert_eq!(table.n_columns(), 4);

    assert_eq!(table.column("Age").unwrap().kind(), ColumnKind::Numeric);
    assert_eq!(
        table.column("Speed_of_Impact").unwrap().kind(),
        ColumnKind::Numeric
    );
    assert_eq!(table.column("Survived").unwrap().kind(), ColumnKind::Boolean);
    assert_eq!(
        table.column("Helmet_Used").unwrap().kind(),
        ColumnKind::Categorical
    );
}

#[test]
fn test_boolean_columns_are_numeric_accessible() {
    let table = table_from_str(crash_csv());
    let survived = table.numeric("Survived").unwrap();
    assert_eq!(survived, &[1.0, 0.0, 1.0, 0.0, 1.0]);
}

#[test]
fn test_categorical_access_is_a_type_error() {
    let table = table_from_str(crash_csv());
    match table.numeric("Helmet_Used") {
        Err(Error::TypeMismatch { column, got, .. }) => {
            assert_eq!(column, "Helmet_Used");
            assert_eq!(got, ColumnKind::Categorical);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_empty_cells_load_as_nan() {
    let table = table_from_str("Age,Survived\n34,1\n,0\n28,\n");
    let ages = table.numeric("Age").unwrap();
    assert_eq!(ages[0], 34.0);
    assert!(ages[1].is_nan());
    let survived = table.numeric("Survived").unwrap();
    assert!(survived[2].is_nan());
}

#[test]
fn test_ragged_rows_are_a_parse_error() {
    let result = Table::from_reader("Age,Survived\n34,1\n51\n".as_bytes());
    assert!(matches!(result, Err(Error::Csv(_))));
}

#[test]
fn test_missing_file_propagates_io_error() {
    let result = Table::from_csv_path(std::path::Path::new("definitely_not_here.csv"));
    assert!(result.is_err());
}
