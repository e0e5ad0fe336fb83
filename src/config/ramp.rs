//! Ramp interval configuration.

use serde::Deserialize;

use super::units::VelocityFactor;

/// Default interval at the start of a ramp, in timer ticks.
pub const DEFAULT_START_INTERVAL: f32 = 1600.0;

/// Default interval floor (maximum speed), in timer ticks.
pub const DEFAULT_MIN_INTERVAL: f32 = 50.0;

/// Interval bounds of a trapezoidal ramp.
///
/// Both values are timer periods: a larger interval is a slower step rate.
/// `start_interval` is used for the first step out of standstill and is the
/// ceiling during deceleration; `min_interval` is the cruise floor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampConfig {
    /// Interval of the first step out of standstill.
    #[serde(default = "default_start_interval")]
    pub start_interval: f32,

    /// Interval floor at full cruise speed.
    #[serde(default = "default_min_interval")]
    pub min_interval: f32,
}

fn default_start_interval() -> f32 {
    DEFAULT_START_INTERVAL
}

fn default_min_interval() -> f32 {
    DEFAULT_MIN_INTERVAL
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            start_interval: DEFAULT_START_INTERVAL,
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}

impl RampConfig {
    /// Create a ramp configuration.
    pub const fn new(start_interval: f32, min_interval: f32) -> Self {
        Self {
            start_interval,
            min_interval,
        }
    }

    /// Check that `0 < min_interval < start_interval` and both are finite.
    pub fn is_valid(&self) -> bool {
        self.min_interval.is_finite()
            && self.start_interval.is_finite()
            && self.min_interval > 0.0
            && self.min_interval < self.start_interval
    }

    /// Cruise floor after applying a velocity factor.
    ///
    /// Never below `min_interval` and never above `start_interval`.
    #[inline]
    pub fn cruise_floor(&self, factor: VelocityFactor) -> f32 {
        (self.min_interval * factor.value()).clamp(self.min_interval, self.start_interval)
    }
}
