//! Position tracking for stepper axes.
//!
//! Provides absolute position tracking in steps with unit conversions.

use crate::config::units::{Millimeters, Steps};

/// Axis position tracker.
///
/// Maintains absolute position in steps and provides unit conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    /// Current position in steps (from origin)
    steps: Steps,
    /// Steps per millimetre for conversions
    steps_per_mm: f32,
}

impl Position {
    /// Create a new position tracker at the origin.
    #[inline]
    pub fn new(steps_per_mm: f32) -> Self {
        Self {
            steps: Steps::default(),
            steps_per_mm,
        }
    }

    /// Create a position tracker at a specific position.
    #[inline]
    pub fn at(steps: Steps, steps_per_mm: f32) -> Self {
        Self {
            steps,
            steps_per_mm,
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Get current position in millimetres.
    #[inline]
    pub fn millimeters(&self) -> Millimeters {
        self.steps.to_millimeters(self.steps_per_mm)
    }

    /// Set position in steps.
    #[inline]
    pub fn set_steps(&mut self, steps: Steps) {
        self.steps = steps;
    }

    /// Move by a number of steps.
    #[inline]
    pub fn move_steps(&mut self, delta: i64) {
        self.steps = Steps(self.steps.0 + delta);
    }

    /// Get steps per millimetre conversion factor.
    #[inline]
    pub fn steps_per_mm(&self) -> f32 {
        self.steps_per_mm
    }

    /// Calculate steps needed to reach an absolute step position.
    #[inline]
    pub fn steps_to(&self, target: Steps) -> i64 {
        target.0 - self.steps.0
    }

    /// Calculate steps needed to cover a relative distance.
    #[inline]
    pub fn steps_for(&self, distance: Millimeters) -> i64 {
        Steps::from_millimeters(distance, self.steps_per_mm).0
    }
}
