//! One-shot analysis of `data.csv` in the working directory
//!
//! No flags, no configuration surface. Exit code 0 on success; any
//! failure propagates uncaught through `anyhow` and exits non-zero.
//! Diagnostics go to stderr so stdout carries only the correlation
//! matrix and the moments report.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use impact_trends::{run_analysis, DATA_FILE};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = run_analysis(Path::new(DATA_FILE), Path::new("."))?;
    println!("{output}");
    Ok(())
}
