//! Unit tests for TOML configuration parsing.

use stepper_ramp::config::{load_config, SystemConfig};
use stepper_ramp::Steps;

/// Test parsing a fully specified axis from TOML.
#[test]
fn test_parse_axis_config() {
    let toml_str = r#"
[axes.x]
name = "x_axis"
invert_direction = true
steps_per_mm = 80.0
pulse_width_ns = 2500
velocity_factor = 1.25

[axes.x.ramp]
start_interval = 2000.0
min_interval = 40.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("x").expect("Axis not found");

    assert_eq!(axis.name.as_str(), "x_axis");
    assert!(axis.invert_direction);
    assert_eq!(axis.steps_per_mm, 80.0);
    assert_eq!(axis.pulse_width_ns, 2500);
    assert_eq!(axis.velocity_factor.value(), 1.25);
    assert_eq!(axis.ramp.start_interval, 2000.0);
    assert_eq!(axis.ramp.min_interval, 40.0);
}

/// Omitted fields fall back to the defaults.
#[test]
fn test_parse_defaults() {
    let toml_str = r#"
[axes.y]
name = "y_axis"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("y").expect("Axis not found");

    assert!(!axis.invert_direction);
    assert_eq!(axis.pulse_width_ns, 2_000);
    assert_eq!(axis.velocity_factor.value(), 1.0);
    assert_eq!(axis.ramp.start_interval, 1600.0);
    assert_eq!(axis.ramp.min_interval, 50.0);
    assert_eq!(axis.mm_to_steps(stepper_ramp::Millimeters(0.0)), Steps(0));
}

/// Test parsing multiple axes.
#[test]
fn test_parse_multiple_axes() {
    let toml_str = r#"
[axes.x]
name = "x_axis"

[axes.y]
name = "y_axis"

[axes.z]
name = "z_axis"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert!(config.axis("x").is_some());
    assert!(config.axis("y").is_some());
    assert!(config.axis("z").is_some());
    assert!(config.axis("w").is_none());
    assert_eq!(config.axis_names().count(), 3);
}

/// A non-positive velocity factor fails at deserialization.
#[test]
fn test_parse_rejects_bad_velocity_factor() {
    let toml_str = r#"
[axes.x]
name = "x_axis"
velocity_factor = 0.0
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("stepper_ramp_load_test.toml");
    std::fs::write(
        &path,
        r#"
[axes.x]
name = "x_axis"
steps_per_mm = 10.0
"#,
    )
    .expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    let _ = std::fs::remove_file(&path);

    let axis = config.axis("x").expect("Axis not found");
    assert_eq!(axis.mm_to_steps(stepper_ramp::Millimeters(1.5)), Steps(15));
}

/// Test that a missing file surfaces as an I/O error.
#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/stepper_ramp.toml");
    assert!(matches!(
        result,
        Err(stepper_ramp::Error::Config(
            stepper_ramp::error::ConfigError::IoError(_)
        ))
    ));
}
