//! Tests for the configuration system: validation, presets, environment
//! parsing and JSON files.

use super::*;
use crate::error::CollError;
use std::env;
use tempfile::tempdir;

#[test]
fn test_all_config_defaults() {
    assert!(TreeConfig::default().validate().is_ok());
    assert!(VectorConfig::default().validate().is_ok());
}

#[test]
fn test_all_presets_valid() {
    assert!(TreeConfig::performance_preset().validate().is_ok());
    assert!(TreeConfig::memory_preset().validate().is_ok());
    assert!(TreeConfig::debug_preset().validate().is_ok());

    assert!(VectorConfig::performance_preset().validate().is_ok());
    assert!(VectorConfig::memory_preset().validate().is_ok());
    assert!(VectorConfig::debug_preset().validate().is_ok());
}

#[test]
fn test_preset_characteristics() {
    assert!(TreeConfig::debug_preset().verify_invariants);
    assert!(!TreeConfig::performance_preset().verify_invariants);
    assert!(
        TreeConfig::performance_preset().initial_capacity
            > TreeConfig::memory_preset().initial_capacity
    );
    assert!(
        VectorConfig::memory_preset().growth_factor
            < VectorConfig::performance_preset().growth_factor
    );
}

#[test]
fn test_validation_edge_cases() {
    let mut config = VectorConfig::default();
    config.growth_factor = 1.0;
    assert!(matches!(config.validate(), Err(CollError::Configuration { .. })));

    config.growth_factor = MAX_GROWTH_FACTOR;
    assert!(config.validate().is_ok());

    config.growth_factor = MAX_GROWTH_FACTOR + 0.5;
    assert!(config.validate().is_err());

    config.growth_factor = f64::NAN;
    assert!(config.validate().is_err());

    let tree = TreeConfig::with_capacity(crate::memory::MAX_SLOTS + 1);
    assert!(tree.validate().is_err());
}

#[test]
fn test_next_capacity() {
    let config = VectorConfig::default();
    assert_eq!(config.next_capacity(0, 1), 1);
    assert_eq!(config.next_capacity(4, 5), 8);
    assert_eq!(config.next_capacity(4, 100), 100);

    let config = VectorConfig {
        initial_capacity: 16,
        growth_factor: 1.5,
    };
    assert_eq!(config.next_capacity(0, 1), 16);
    assert_eq!(config.next_capacity(16, 17), 24);
}

#[test]
fn test_environment_variable_parsing() {
    let prefix = "STDCOLL_TEST_ENV_PARSE_";
    env::set_var(format!("{}TREE_INITIAL_CAPACITY", prefix), "256");
    env::set_var(format!("{}TREE_VERIFY_INVARIANTS", prefix), "yes");
    env::set_var(format!("{}VECTOR_GROWTH_FACTOR", prefix), "1.25");
    env::set_var(format!("{}VECTOR_INITIAL_CAPACITY", prefix), "not-a-number");

    let tree = TreeConfig::from_env_with_prefix(prefix).unwrap();
    assert_eq!(tree.initial_capacity, 256);
    assert!(tree.verify_invariants);

    let vector = VectorConfig::from_env_with_prefix(prefix).unwrap();
    assert_eq!(vector.growth_factor, 1.25);
    // unparsable values fall back to the default
    assert_eq!(vector.initial_capacity, 0);

    env::remove_var(format!("{}TREE_INITIAL_CAPACITY", prefix));
    env::remove_var(format!("{}TREE_VERIFY_INVARIANTS", prefix));
    env::remove_var(format!("{}VECTOR_GROWTH_FACTOR", prefix));
    env::remove_var(format!("{}VECTOR_INITIAL_CAPACITY", prefix));
}

#[test]
fn test_environment_rejects_invalid_values() {
    let prefix = "STDCOLL_TEST_ENV_INVALID_";
    env::set_var(format!("{}VECTOR_GROWTH_FACTOR", prefix), "0.5");
    assert!(VectorConfig::from_env_with_prefix(prefix).is_err());
    env::remove_var(format!("{}VECTOR_GROWTH_FACTOR", prefix));
}

#[test]
fn test_environment_boolean_parsing() {
    let var = "STDCOLL_TEST_BOOL_PARSE";
    for truthy in ["true", "TRUE", "1", "yes", "On"] {
        env::set_var(var, truthy);
        assert!(parse_env_bool(var, false), "{} should parse as true", truthy);
    }
    for falsy in ["false", "0", "no", "off", "maybe"] {
        env::set_var(var, falsy);
        assert!(!parse_env_bool(var, true), "{} should parse as false", falsy);
    }
    env::remove_var(var);
    assert!(parse_env_bool(var, true));
}

#[test]
fn test_file_serialization() -> Result<()> {
    let dir = tempdir()?;

    let tree_path = dir.path().join("tree.json");
    let tree = TreeConfig {
        initial_capacity: 42,
        verify_invariants: true,
    };
    tree.save_to_file(&tree_path)?;
    assert_eq!(TreeConfig::load_from_file(&tree_path)?, tree);

    let vector_path = dir.path().join("vector.json");
    let vector = VectorConfig::memory_preset();
    vector.save_to_file(&vector_path)?;
    assert_eq!(VectorConfig::load_from_file(&vector_path)?, vector);
    Ok(())
}

#[test]
fn test_configuration_error_handling() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    let err = TreeConfig::load_from_file(&missing).unwrap_err();
    assert_eq!(err.category(), "io");

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "{ not json").unwrap();
    let err = TreeConfig::load_from_file(&garbage).unwrap_err();
    assert_eq!(err.category(), "config");

    let invalid = dir.path().join("invalid.json");
    std::fs::write(&invalid, r#"{"initial_capacity":0,"growth_factor":9.0}"#).unwrap();
    assert!(VectorConfig::load_from_file(&invalid).is_err());
}
