//! Filesystem tests for loading, writing and generating datasets.

use std::fs;

use setcover_config::GeneratorConfig;
use setcover_core::Cover;
use setcover_io::{
    generate_datasets, load_family, read_family, write_cover, DatasetError, DatasetName,
};
use tempfile::TempDir;

#[test]
fn test_load_family_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sets.csv");
    fs::write(&path, "set_id,member_id\nA,1\nA,2\nA,3\nB,3\nB,4\nC,5\n").unwrap();

    let family = load_family(&path).unwrap();

    assert_eq!(family.len(), 3);
    assert_eq!(family.universe_size(), 5);
    assert_eq!(family.get(&"B".to_string()).map(|s| s.len()), Some(2));
}

#[test]
fn test_columns_found_by_header() {
    let data = "weight,member_id,set_id\n0.5,x,s1\n0.1,y,s1\n0.9,x,s2\n";
    let family = read_family(data.as_bytes()).unwrap();

    assert_eq!(family.len(), 2);
    assert!(family.contains_set(&"s1".to_string()));
    assert_eq!(family.universe_size(), 2);
}

#[test]
fn test_identifiers_stay_strings() {
    let data = "set_id,member_id\n7,01\n007,1\n";
    let family = read_family(data.as_bytes()).unwrap();

    assert_eq!(family.len(), 2);
    assert_eq!(family.universe_size(), 2);
}

#[test]
fn test_missing_column_is_reported() {
    let err = read_family("set_id,member\nA,1\n".as_bytes()).unwrap_err();

    assert!(matches!(err, DatasetError::MissingColumn("member_id")));
}

#[test]
fn test_empty_identifier_reports_line() {
    let data = "set_id,member_id\nA,1\n,2\n";
    let err = read_family(data.as_bytes()).unwrap_err();

    match err {
        DatasetError::EmptyIdentifier { line, column } => {
            assert_eq!(line, 3);
            assert_eq!(column, "set_id");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_family(dir.path().join("absent.csv")).unwrap_err();

    assert!(matches!(err, DatasetError::Io(_)));
}

#[test]
fn test_write_cover_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cover.csv");
    let cover = Cover::from(vec!["A".to_string(), "B".to_string(), "C".to_string()]);

    write_cover(&path, &cover).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "rank,set_id\n0,A\n1,B\n2,C\n"
    );
}

#[test]
fn test_generate_datasets_skips_invalid_combinations() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default()
        .with_grid(vec![2, 20], vec![10, 30])
        .with_total_sets(15)
        .with_output_dir(dir.path().to_string_lossy());

    let written = generate_datasets(&config).unwrap();

    let names: Vec<DatasetName> = written
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap().parse().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            DatasetName::new(2, 10),
            DatasetName::new(2, 30),
            DatasetName::new(20, 30),
        ]
    );

    let family = load_family(&written[2]).unwrap();
    assert_eq!(family.len(), 15);
    assert!(family.iter().all(|(_, members)| members.len() == 20));
    assert!(family.universe_size() <= 30);
}

#[test]
fn test_generate_datasets_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let config = GeneratorConfig::default()
        .with_grid(vec![3], vec![40])
        .with_total_sets(25)
        .with_random_seed(42);

    let a = generate_datasets(&config.clone().with_output_dir(first.path().to_string_lossy()))
        .unwrap();
    let b = generate_datasets(&config.with_output_dir(second.path().to_string_lossy())).unwrap();

    assert_eq!(
        fs::read_to_string(&a[0]).unwrap(),
        fs::read_to_string(&b[0]).unwrap()
    );
}
