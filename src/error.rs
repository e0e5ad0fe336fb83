//! Error types for stepper-ramp.
//!
//! Provides unified error handling across configuration, collaborator I/O and
//! motion requests. The tick path itself never fails on arithmetic; the only
//! runtime failures are collaborator (pin) errors.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-ramp operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pulse channel or timing source error
    Motor(MotorError),
    /// Motion request error
    Motion(MotionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// Axis name is empty
    EmptyAxisName,
    /// Ramp intervals are inconsistent (need 0 < min < start)
    InvalidRampIntervals {
        /// Interval at the start of a ramp (slowest)
        start: f32,
        /// Interval floor (fastest)
        min: f32,
    },
    /// Invalid steps per millimetre (must be finite and > 0)
    InvalidStepsPerMm(f32),
    /// Invalid pulse width (must be > 0)
    InvalidPulseWidth(u32),
    /// Required builder field missing
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Collaborator errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// STEP pin operation failed
    StepPinError,
    /// DIR pin operation failed
    DirectionPinError,
}

/// Motion request errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionError {
    /// Velocity factor must be finite and > 0
    InvalidVelocityFactor(f32),
    /// Distance does not fit the controller's step counters
    DistanceOverflow(i64),
    /// Shared controller slot is empty
    NotInstalled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::EmptyAxisName => write!(f, "Axis name must not be empty"),
            ConfigError::InvalidRampIntervals { start, min } => write!(
                f,
                "Invalid ramp intervals: need 0 < min ({}) < start ({})",
                min, start
            ),
            ConfigError::InvalidStepsPerMm(v) => {
                write!(f, "Invalid steps per mm: {}. Must be > 0", v)
            }
            ConfigError::InvalidPulseWidth(v) => {
                write!(f, "Invalid pulse width: {} ns. Must be > 0", v)
            }
            ConfigError::MissingField(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::StepPinError => write!(f, "STEP pin operation failed"),
            MotorError::DirectionPinError => write!(f, "DIR pin operation failed"),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidVelocityFactor(v) => {
                write!(f, "Invalid velocity factor: {}. Must be finite and > 0", v)
            }
            MotionError::DistanceOverflow(steps) => {
                write!(f, "Move of {} steps exceeds the step counter range", steps)
            }
            MotionError::NotInstalled => write!(f, "No controller installed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
