//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::ramp::RampConfig;
use super::units::{Millimeters, Steps, VelocityFactor};

/// Default drive resolution of the reference mechanism.
pub const DEFAULT_STEPS_PER_MM: f32 = 2.083333;

/// Default STEP pulse width in nanoseconds.
pub const DEFAULT_PULSE_WIDTH_NS: u32 = 2_000;

/// Complete axis configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Ramp interval bounds.
    #[serde(default)]
    pub ramp: RampConfig,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Steps per millimetre of travel.
    #[serde(default = "default_steps_per_mm")]
    pub steps_per_mm: f32,

    /// Minimum STEP pulse width in nanoseconds.
    #[serde(default = "default_pulse_width_ns")]
    pub pulse_width_ns: u32,

    /// Initial cruise throttle.
    #[serde(default)]
    pub velocity_factor: VelocityFactor,
}

fn default_steps_per_mm() -> f32 {
    DEFAULT_STEPS_PER_MM
}

fn default_pulse_width_ns() -> u32 {
    DEFAULT_PULSE_WIDTH_NS
}

impl AxisConfig {
    /// Create an axis configuration with default mechanics.
    pub fn new(name: &str, ramp: RampConfig) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            ramp,
            invert_direction: false,
            steps_per_mm: DEFAULT_STEPS_PER_MM,
            pulse_width_ns: DEFAULT_PULSE_WIDTH_NS,
            velocity_factor: VelocityFactor::FULL,
        }
    }

    /// Convert a distance to whole steps.
    #[inline]
    pub fn mm_to_steps(&self, mm: Millimeters) -> Steps {
        Steps::from_millimeters(mm, self.steps_per_mm)
    }

    /// Convert steps to a distance.
    #[inline]
    pub fn steps_to_mm(&self, steps: Steps) -> Millimeters {
        steps.to_millimeters(self.steps_per_mm)
    }
}
