//! End-to-end pipeline tests against a scratch directory

use std::fs;
use std::path::PathBuf;

use impact_trends::{
    run_analysis, CATEGORICAL_PLOT_FILE, RELATIONAL_PLOT_FILE, STATISTICAL_PLOT_FILE,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("impact-trends-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_dataset(dir: &PathBuf) -> PathBuf {
    let mut csv = String::from("Age,Speed_of_Impact,Survived,Helmet_Used\n");
    for i in 0..24u32 {
        let age = 20 + (i * 7) % 50;
        let speed = 40 + (i * 13) % 80;
        let survived = i % 2;
        let helmet = if i % 3 == 0 { "Yes" } else { "No" };
        csv.push_str(&format!("{age},{speed},{survived},{helmet}\n"));
    }
    let path = dir.join("data.csv");
    fs::write(&path, csv).unwrap();
    path
}

#[test]
fn test_full_pipeline_emits_report_and_figures() {
    let dir = scratch_dir("full");
    let data = write_dataset(&dir);

    let output = run_analysis(&data, &dir).unwrap();

    // Correlation matrix covers the numeric columns only
    assert!(output.contains("Age"));
    assert!(output.contains("Speed_of_Impact"));
    assert!(output.contains("Survived"));
    assert!(!output.contains("Helmet_Used"));
    assert!(output.contains("1.000000"));

    // Moments report with the interpretive sentence
    assert!(output.contains("For the attribute Age:"));
    assert!(output.contains("Mean = "));
    assert!(output.contains("The data was "));

    for file in [
        RELATIONAL_PLOT_FILE,
        CATEGORICAL_PLOT_FILE,
        STATISTICAL_PLOT_FILE,
    ] {
        let metadata = fs::metadata(dir.join(file)).unwrap();
        assert!(metadata.len() > 0, "{file} is empty");
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_repeated_runs_are_textually_identical() {
    let dir = scratch_dir("idempotent");
    let data = write_dataset(&dir);

    let first = run_analysis(&data, &dir).unwrap();
    let second = run_analysis(&data, &dir).unwrap();
    assert_eq!(first, second);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_input_file_is_fatal() {
    let dir = scratch_dir("missing");
    let result = run_analysis(&dir.join("data.csv"), &dir);
    assert!(result.is_err());
    fs::remove_dir_all(&dir).unwrap();
}
