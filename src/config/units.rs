//! Unit types for physical quantities.
//!
//! Keeps motor steps, linear distance and speed scaling apart so a millimetre
//! value can never be handed to an API that expects steps.

use core::ops::{Add, Sub};

use serde::Deserialize;

use crate::error::MotionError;

/// Linear distance in millimetres.
///
/// Used for configuration and user-facing API. Internally converted to [`Steps`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millimeters(pub f32);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Motor position in steps (absolute from origin).
///
/// Uses i64 so the tracked position never wraps during the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Convert to millimetres using the steps per millimetre ratio.
    #[inline]
    pub fn to_millimeters(self, steps_per_mm: f32) -> Millimeters {
        Millimeters(self.0 as f32 / steps_per_mm)
    }

    /// Create from millimetres, rounding to the nearest whole step.
    #[inline]
    pub fn from_millimeters(mm: Millimeters, steps_per_mm: f32) -> Self {
        Self(libm::roundf(mm.0 * steps_per_mm) as i64)
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Multiplier on the cruise interval floor.
///
/// `1.0` cruises at the configured maximum speed, `2.0` at half of it.
/// Validated at construction to be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VelocityFactor(f32);

impl VelocityFactor {
    /// Full configured speed.
    pub const FULL: Self = Self(1.0);

    /// Create a new factor with validation.
    ///
    /// # Errors
    ///
    /// Returns `MotionError::InvalidVelocityFactor` for zero, negative, NaN or
    /// infinite values.
    pub fn new(value: f32) -> Result<Self, MotionError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(MotionError::InvalidVelocityFactor(value))
        }
    }

    /// Get the raw multiplier.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for VelocityFactor {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<f32> for VelocityFactor {
    type Error = MotionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for VelocityFactor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = f32::deserialize(deserializer)?;
        VelocityFactor::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Millimeters.
    fn mm(self) -> Millimeters;
}

impl UnitExt for f32 {
    #[inline]
    fn mm(self) -> Millimeters {
        Millimeters(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_factor_valid_values() {
        assert!(VelocityFactor::new(1.0).is_ok());
        assert!(VelocityFactor::new(0.25).is_ok());
        assert!(VelocityFactor::new(8.0).is_ok());
    }

    #[test]
    fn test_velocity_factor_invalid_values() {
        assert!(VelocityFactor::new(0.0).is_err());
        assert!(VelocityFactor::new(-1.0).is_err());
        assert!(VelocityFactor::new(f32::NAN).is_err());
        assert!(VelocityFactor::new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_steps_to_millimeters() {
        let steps = Steps::new(25);
        let mm = steps.to_millimeters(2.5);
        assert!((mm.value() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_millimeters_round_to_nearest_step() {
        // 2.083333 steps/mm: 12 mm is 24.99996 steps
        assert_eq!(Steps::from_millimeters(12.0.mm(), 2.083333), Steps(25));
        assert_eq!(Steps::from_millimeters((-12.0).mm(), 2.083333), Steps(-25));
    }
}
