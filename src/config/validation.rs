//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AxisConfig, RampConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks every axis:
/// - Name is not empty
/// - Ramp intervals satisfy `0 < min_interval < start_interval`
/// - Steps per millimetre is finite and positive
/// - Pulse width is non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    Ok(())
}

/// Validate a single axis configuration.
pub fn validate_axis(config: &AxisConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(Error::Config(ConfigError::EmptyAxisName));
    }

    validate_ramp(&config.ramp)?;

    if !config.steps_per_mm.is_finite() || config.steps_per_mm <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerMm(
            config.steps_per_mm,
        )));
    }

    if config.pulse_width_ns == 0 {
        return Err(Error::Config(ConfigError::InvalidPulseWidth(0)));
    }

    Ok(())
}

/// Validate ramp interval bounds.
pub fn validate_ramp(ramp: &RampConfig) -> Result<()> {
    if !ramp.is_valid() {
        return Err(Error::Config(ConfigError::InvalidRampIntervals {
            start: ramp.start_interval,
            min: ramp.min_interval,
        }));
    }
    Ok(())
}
