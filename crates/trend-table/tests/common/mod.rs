//! Common test utilities for trend-table tests

use trend_table::Table;

/// Parse a table from an inline CSV string
pub fn table_from_str(csv: &str) -> Table {
    Table::from_reader(csv.as_bytes()).unwrap()
}

/// A small crash-survival dataset with one categorical column
pub fn crash_csv() -> &'static str {
    "Age,Speed_of_Impact,Survived,Helmet_Used\n\
     34,60,1,Yes\n\
     51,110,0,No\n\
     28,45,1,Yes\n\
     63,95,0,No\n\
     41,70,1,No\n"
}
