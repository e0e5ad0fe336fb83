//! Ramp state machine phases.

/// Phase of the trapezoidal ramp.
///
/// Governs which interval update runs on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// No motion in progress; ticks are disabled once observed.
    #[default]
    Stopped,
    /// Accelerating out of standstill.
    RampingUp,
    /// Cruising at the interval floor.
    Running,
    /// Decelerating toward standstill.
    RampingDown,
}

impl MotionState {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            MotionState::Stopped => "Stopped",
            MotionState::RampingUp => "RampingUp",
            MotionState::Running => "Running",
            MotionState::RampingDown => "RampingDown",
        }
    }

    /// Check if the axis is in motion.
    #[inline]
    pub fn is_moving(self) -> bool {
        self != MotionState::Stopped
    }
}
