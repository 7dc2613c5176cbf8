//! Tests for the numeric correlation matrix and its rendering

mod common;

use approx::assert_relative_eq;
use common::table_from_str;
use trend_table::Error;

#[test]
fn test_matrix_covers_exactly_the_numeric_columns() {
    let table = table_from_str(common::crash_csv());
    let matrix = table.correlation_matrix().unwrap();
    assert_eq!(matrix.labels(), &["Age", "Speed_of_Impact", "Survived"]);
}

#[test]
fn test_perfect_linear_correlation() {
    let table = table_from_str("x,y,z\n1,2,9\n2,4,7\n3,6,5\n4,8,3\n");
    let matrix = table.correlation_matrix().unwrap();

    for i in 0..3 {
        assert_relative_eq!(matrix.get(i, i), 1.0, epsilon = 1e-12);
    }
    // y = 2x, z = -2x + 11
    assert_relative_eq!(matrix.get(0, 1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(matrix.get(0, 2), -1.0, epsilon = 1e-12);
    // Symmetry
    assert_relative_eq!(matrix.get(1, 2), matrix.get(2, 1), epsilon = 1e-12);
}

#[test]
fn test_constant_column_correlates_as_nan() {
    let table = table_from_str("x,c\n1,5\n2,5\n3,5\n");
    let matrix = table.correlation_matrix().unwrap();
    assert!(matrix.get(0, 1).is_nan());
    assert!(matrix.get(1, 1).is_nan());
}

#[test]
fn test_all_categorical_table_is_an_error() {
    let table = table_from_str("name,city\nana,rome\nbo,oslo\n");
    assert!(matches!(
        table.correlation_matrix(),
        Err(Error::NoNumericColumns)
    ));
}

#[test]
fn test_display_is_a_labeled_matrix() {
    let table = table_from_str("Age,Survived\n34,1\n51,0\n28,1\n");
    let rendered = table.correlation_matrix().unwrap().to_string();

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    // Header row carries both labels, each data row starts with its label
    assert!(lines[0].contains("Age") && lines[0].contains("Survived"));
    assert!(lines[1].starts_with("Age"));
    assert!(lines[2].starts_with("Survived"));
    // Diagonal rendered to six decimal places
    assert!(lines[1].contains("1.000000"));
}
