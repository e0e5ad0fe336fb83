//! Configuration module for stepper-ramp.
//!
//! Provides types for loading and validating axis and ramp configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod axis;
#[cfg(feature = "std")]
mod loader;
mod ramp;
mod system;
pub mod units;
mod validation;

pub use axis::{AxisConfig, DEFAULT_PULSE_WIDTH_NS, DEFAULT_STEPS_PER_MM};
pub use ramp::{RampConfig, DEFAULT_MIN_INTERVAL, DEFAULT_START_INTERVAL};
pub use system::SystemConfig;
pub use validation::{validate_axis, validate_config, validate_ramp};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Millimeters, Steps, VelocityFactor};
