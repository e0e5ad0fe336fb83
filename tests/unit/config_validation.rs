//! Unit tests for configuration validation.

use stepper_ramp::config::{parse_config, validate_config, SystemConfig};
use stepper_ramp::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[axes.x]
name = "x_axis"

[axes.x.ramp]
start_interval = 1600.0
min_interval = 50.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when the floor is not below the start interval.
#[test]
fn test_inverted_ramp_rejected() {
    let toml_str = r#"
[axes.x]
name = "x_axis"

[axes.x.ramp]
start_interval = 50.0
min_interval = 1600.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidRampIntervals { .. }))
    ));
}

/// Equal bounds leave no ramp at all.
#[test]
fn test_equal_ramp_bounds_rejected() {
    let toml_str = r#"
[axes.x]
name = "x_axis"

[axes.x.ramp]
start_interval = 100.0
min_interval = 100.0
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Test validation fails for a zero minimum interval.
#[test]
fn test_zero_min_interval_rejected() {
    let toml_str = r#"
[axes.x]
name = "x_axis"

[axes.x.ramp]
min_interval = 0.0
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Test validation fails for a non-positive scale.
#[test]
fn test_negative_steps_per_mm_rejected() {
    let toml_str = r#"
[axes.x]
name = "x_axis"
steps_per_mm = -1.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepsPerMm(_)))
    ));
}

/// Test validation fails for an empty name.
#[test]
fn test_empty_name_rejected() {
    let toml_str = r#"
[axes.x]
name = ""
"#;

    assert_eq!(
        parse_config(toml_str).map(|_| ()),
        Err(Error::Config(ConfigError::EmptyAxisName))
    );
}

/// Test validation fails for a zero pulse width.
#[test]
fn test_zero_pulse_width_rejected() {
    let toml_str = r#"
[axes.x]
name = "x_axis"
pulse_width_ns = 0
"#;

    assert_eq!(
        parse_config(toml_str).map(|_| ()),
        Err(Error::Config(ConfigError::InvalidPulseWidth(0)))
    );
}
