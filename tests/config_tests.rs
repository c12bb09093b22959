//! Tests for the diff configuration builder and JSON loading

use kodegen_tools_htmldiff::{DiffAlgorithm, DiffConfig, DiffError, ExpandState, HtmlDiffer};

#[test]
fn test_builder_defaults() {
    let config = DiffConfig::builder().build().unwrap();

    assert_eq!(config, DiffConfig::default());
    assert_eq!(config.algorithm(), DiffAlgorithm::Myers);
    assert!(config.decode_entities());
    assert_eq!(config.max_table_cells(), Some(100_000));
}

#[test]
fn test_builder_with_all_fields() {
    let config = DiffConfig::builder()
        .algorithm(DiffAlgorithm::Patience)
        .decode_entities(false)
        .max_table_cells(None)
        .build()
        .unwrap();

    assert_eq!(config.algorithm(), DiffAlgorithm::Patience);
    assert!(!config.decode_entities());
    assert_eq!(config.max_table_cells(), None);
}

#[test]
fn test_builder_rejects_zero_cell_limit() {
    let err = DiffConfig::builder().max_table_cells(Some(0)).build().unwrap_err();
    assert!(err.to_string().contains("max_table_cells"));

    let converted = DiffError::from(err);
    assert!(matches!(converted, DiffError::InvalidConfig(_)));
}

#[test]
fn test_from_json_partial_uses_defaults() {
    let config = DiffConfig::from_json(r#"{"algorithm": "lcs"}"#).unwrap();

    assert_eq!(config.algorithm(), DiffAlgorithm::Lcs);
    assert!(config.decode_entities());
    assert_eq!(config.max_table_cells(), Some(100_000));
}

#[test]
fn test_from_json_errors() {
    assert!(matches!(
        DiffConfig::from_json(r#"{"max_table_cells": 0}"#),
        Err(DiffError::InvalidConfig(_))
    ));
    assert!(matches!(
        DiffConfig::from_json(r#"{"algorithm": "quantum"}"#),
        Err(DiffError::Json(_))
    ));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = DiffConfig::builder()
        .algorithm(DiffAlgorithm::Patience)
        .max_table_cells(Some(42))
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(DiffConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_differ_exposes_config() {
    let config = DiffConfig::builder().decode_entities(false).build().unwrap();
    let differ = HtmlDiffer::new(config.clone());
    assert_eq!(differ.config(), &config);

    let model = differ.diff("<p>a &amp; b</p>", "<p>a & b</p>", &ExpandState::default());
    assert!(model.has_changes());
}
