//! # stepper-ramp
//!
//! Interrupt-driven trapezoidal ramp controller for stepper motors.
//!
//! ## Features
//!
//! - **Tick-driven**: one call per timer interrupt decides whether to step and
//!   reprograms the next period
//! - **Division-light ramps**: successive intervals from one multiply and one
//!   divide, no square roots
//! - **Retargetable**: new moves are accepted mid-ramp, including direction
//!   reversals, without losing step count
//! - **Capability traits**: one algorithm per axis, collaborators injected as
//!   values (`PulseChannel`, `TimingSource`, `MotionObserver`)
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_ramp::{PinPulseChannel, RampController};
//!
//! let channel = PinPulseChannel::new(step_pin, dir_pin, delay);
//! let mut axis = RampController::builder()
//!     .name("x")
//!     .channel(channel)
//!     .timer(timer1)
//!     .start_interval(1600.0)
//!     .min_interval(50.0)
//!     .build()?;
//!
//! axis.move_steps(100)?;
//!
//! // from the timer interrupt
//! axis.on_tick()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, RampConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{Direction, MotionState, RampCore, RampProfile, Request, TickOutcome};
pub use motor::{
    MotionObserver, PinPulseChannel, PulseChannel, RampController, RampControllerBuilder,
    SharedController, TimingSource,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Millimeters, Steps, VelocityFactor};
