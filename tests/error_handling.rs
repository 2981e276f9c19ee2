// tests/error_handling.rs

use std::io::Write;

use colocate::config::{Scenario, load_and_validate, parse_str};
use colocate::errors::ColocateError;
use tempfile::NamedTempFile;

fn load(contents: &str) -> Result<Scenario, ColocateError> {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    load_and_validate(file.path())
}

#[test]
fn test_scenario_without_nodes_returns_config_error() {
    let result = load(
        r#"
[container]
volumes_from = ["db1"]
"#,
    );

    match result {
        Err(ColocateError::ConfigError(msg)) => {
            assert!(msg.contains("at least one [[node]]"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_node_name_returns_config_error() {
    let result = load(
        r#"
[[node]]
name = "A"

[[node]]
name = "A"
containers = ["db1"]
"#,
    );

    match result {
        Err(ColocateError::ConfigError(msg)) => {
            assert!(msg.contains("duplicate node name"));
            assert!(msg.contains("'A'"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_node_name_returns_config_error() {
    let result = load(
        r#"
[[node]]
name = " "
"#,
    );

    assert!(matches!(result, Err(ColocateError::ConfigError(msg)) if msg.contains("empty name")));
}

#[test]
fn test_empty_container_id_returns_config_error() {
    let result = load(
        r#"
[[node]]
name = "A"
containers = [{ id = "", names = ["/db"] }]
"#,
    );

    match result {
        Err(ColocateError::ConfigError(msg)) => {
            assert!(msg.contains("empty id"));
            assert!(msg.contains("'A'"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_container_on_node_returns_config_error() {
    let result = load(
        r#"
[[node]]
name = "A"
containers = ["db1", { id = "db1" }]
"#,
    );

    match result {
        Err(ColocateError::ConfigError(msg)) => {
            assert!(msg.contains("'db1' more than once"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_invalid_toml_returns_toml_error() {
    let result = load("[[node]\nname = ");
    assert!(matches!(result, Err(ColocateError::TomlError(_))));
}

#[test]
fn test_missing_file_returns_io_error() {
    let result = load_and_validate("/definitely/not/here/Colocate.toml");
    assert!(matches!(result, Err(ColocateError::IoError(_))));
}

#[test]
fn test_container_identifiers_are_not_validated() {
    // Odd identifiers in [container] are passed through untouched.
    let raw = parse_str(
        r#"
[container]
links = ["no-alias", ":", "a:b:c"]
network_mode = "container:"

[[node]]
name = "A"
"#,
    )
    .unwrap();

    let scenario = Scenario::try_from(raw).unwrap();
    assert_eq!(scenario.container.host_config.links.len(), 3);
    assert_eq!(scenario.container.host_config.network_mode, "container:");
}
