//! End-to-end batch runs over temporary dataset directories.

use std::fs;

use setcover_benchmark::{BatchError, BatchRunner};
use setcover_config::{BatchConfig, GeneratorConfig};
use setcover_io::{generate_datasets, load_family};
use setcover_solver::{verify_cover, GreedySetCoverSolver};
use tempfile::TempDir;

fn config_for(datasets: &TempDir, results: &TempDir) -> BatchConfig {
    BatchConfig::default()
        .with_dataset_dir(datasets.path().to_string_lossy())
        .with_results_dir(results.path().join("out").to_string_lossy())
}

#[test]
fn test_batch_over_generated_grid() {
    let datasets = TempDir::new().unwrap();
    let results = TempDir::new().unwrap();
    generate_datasets(
        &GeneratorConfig::default()
            .with_grid(vec![5, 1], vec![20, 10])
            .with_total_sets(40)
            .with_output_dir(datasets.path().to_string_lossy()),
    )
    .unwrap();

    let runner = BatchRunner::new(GreedySetCoverSolver::default(), config_for(&datasets, &results));
    let batch = runner.run().unwrap();

    let keys: Vec<_> = batch.results.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec![(1, 10), (1, 20), (5, 10), (5, 20)]);
    for row in &batch.results {
        assert_eq!(row.set_count, 40);
        assert!(row.required_sets >= row.universe_size.div_ceil(row.set_size));
    }

    let csv = fs::read_to_string(
        results
            .path()
            .join("out")
            .join("min_sets_by_size_cardinality.csv"),
    )
    .unwrap();
    assert!(csv.starts_with("set_size,unique_members,required_sets,universe_size,set_count,solve_time_ms\n"));
    assert_eq!(csv.lines().count(), 5);
}

#[test]
fn test_unparseable_names_are_skipped() {
    let datasets = TempDir::new().unwrap();
    let results = TempDir::new().unwrap();
    fs::write(
        datasets.path().join("set_data_2_4.csv"),
        "set_id,member_id\na,1\na,2\nb,3\nb,4\nc,1\nc,3\n",
    )
    .unwrap();
    fs::write(datasets.path().join("notes.csv"), "set_id,member_id\nx,1\n").unwrap();
    fs::write(datasets.path().join("README.md"), "not a dataset").unwrap();

    let runner = BatchRunner::new(GreedySetCoverSolver::default(), config_for(&datasets, &results));
    let batch = runner.run().unwrap();

    assert_eq!(batch.len(), 1);
    assert_eq!(batch.skipped, vec!["notes.csv".to_string()]);
    assert_eq!(batch.results[0].required_sets, 2);
}

#[test]
fn test_covers_and_report_are_written() {
    let datasets = TempDir::new().unwrap();
    let results = TempDir::new().unwrap();
    let dataset = datasets.path().join("set_data_2_5.csv");
    fs::write(&dataset, "set_id,member_id\nA,1\nA,2\nB,3\nB,4\nC,5\nC,1\n").unwrap();
    let report = results.path().join("report.md");

    let config = config_for(&datasets, &results)
        .with_write_covers(true)
        .with_markdown_report(report.to_string_lossy());
    BatchRunner::new(GreedySetCoverSolver::default(), config)
        .run()
        .unwrap();

    let cover = fs::read_to_string(results.path().join("out").join("cover_set_data_2_5.csv")).unwrap();
    assert_eq!(cover, "rank,set_id\n0,A\n1,B\n2,C\n");

    let family = load_family(&dataset).unwrap();
    let ids: Vec<String> = cover.lines().skip(1).map(|l| l[2..].to_string()).collect();
    assert!(verify_cover(&family, &ids).is_ok());

    let md = fs::read_to_string(report).unwrap();
    assert!(md.contains("| 2 | 3 |"));
}

#[test]
fn test_malformed_dataset_aborts_with_path() {
    let datasets = TempDir::new().unwrap();
    let results = TempDir::new().unwrap();
    let bad = datasets.path().join("set_data_1_1.csv");
    fs::write(&bad, "set_id,member\nA,1\n").unwrap();

    let err = BatchRunner::new(GreedySetCoverSolver::default(), config_for(&datasets, &results))
        .run()
        .unwrap_err();

    assert!(matches!(err, BatchError::Dataset { .. }));
    assert_eq!(err.path(), bad.as_path());
}

#[test]
fn test_missing_dataset_dir_is_io_error() {
    let results = TempDir::new().unwrap();
    let config = BatchConfig::default()
        .with_dataset_dir(results.path().join("absent").to_string_lossy())
        .with_results_dir(results.path().to_string_lossy());

    let err = BatchRunner::new(GreedySetCoverSolver::default(), config)
        .run()
        .unwrap_err();

    assert!(matches!(err, BatchError::Io { .. }));
}
