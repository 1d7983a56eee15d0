//! Tests for set cover configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [solver]
        environment_mode = "full_assert"
        tie_break = "insertion_order"

        [generator]
        set_sizes = [1, 2]
        unique_members = [10]
        total_sets = 20
        random_seed = 42
        output_dir = "data"

        [batch]
        dataset_dir = "data"
        results_dir = "out"
        markdown_report = "out/report.md"
        write_covers = true
    "#;

    let config = SetCoverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.solver.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.solver.tie_break, TieBreak::InsertionOrder);
    assert!(config.solver.prune_exhausted);
    assert_eq!(config.generator.set_sizes, vec![1, 2]);
    assert_eq!(config.generator.random_seed, 42);
    assert_eq!(config.batch.results_dir, "out");
    assert_eq!(config.batch.markdown_report.as_deref(), Some("out/report.md"));
    assert!(config.batch.write_covers);
    assert_eq!(config.batch.results_file, "min_sets_by_size_cardinality.csv");
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        solver:
          tie_break: identifier
          prune_exhausted: false
        generator:
          total_sets: 5
    "#;

    let config = SetCoverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.solver.tie_break, TieBreak::Identifier);
    assert!(!config.solver.prune_exhausted);
    assert_eq!(config.generator.total_sets, 5);
    assert_eq!(config.generator.unique_members.len(), 7);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = SetCoverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SetCoverConfig::default());
    assert_eq!(config.generator.set_sizes, vec![1, 2, 5, 10, 20, 50, 100]);
    assert_eq!(config.generator.total_sets, 1000);
    assert_eq!(config.batch.dataset_dir, "datasets");
}

#[test]
fn test_unknown_tie_break_is_rejected() {
    let err = SetCoverConfig::from_toml_str(
        r#"
        [solver]
        tie_break = "random"
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = SetCoverConfig::new()
        .with_solver(
            SolverConfig::new()
                .with_tie_break(TieBreak::InsertionOrder)
                .with_prune_exhausted(false),
        )
        .with_generator(GeneratorConfig::default().with_random_seed(9).with_total_sets(3))
        .with_batch(BatchConfig::default().with_write_covers(true));

    assert_eq!(config.solver.tie_break, TieBreak::InsertionOrder);
    assert_eq!(config.generator.random_seed, 9);
    assert_eq!(config.generator.total_sets, 3);
    assert!(config.batch.write_covers);
}

#[test]
fn test_validate_rejects_zero_total_sets() {
    let config =
        SetCoverConfig::new().with_generator(GeneratorConfig::default().with_total_sets(0));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_zero_in_grid() {
    let generator = GeneratorConfig::default().with_grid(vec![0, 1], vec![10]);
    assert!(generator.validate().is_err());

    let generator = GeneratorConfig::default().with_grid(vec![1], vec![0]);
    assert!(generator.validate().is_err());
}

#[test]
fn test_load_missing_file() {
    let result = SetCoverConfig::load("definitely/not/here.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
