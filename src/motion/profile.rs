//! Offline profile preview.
//!
//! Runs the exact tick arithmetic of [`RampCore`] without hardware so callers
//! can pre-flight a move: how many steps each phase takes, how fast the axis
//! gets and how long the move lasts in timer ticks.

use crate::config::units::VelocityFactor;
use crate::config::RampConfig;

use super::machine::{NextTick, RampCore, Request};
use super::state::MotionState;

/// Summary of a simulated move from standstill.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampProfile {
    /// Total steps to move (absolute value).
    pub total_steps: u32,

    /// Steps emitted while accelerating.
    pub accel_steps: u32,

    /// Steps emitted at cruise speed.
    pub cruise_steps: u32,

    /// Steps emitted while decelerating.
    pub decel_steps: u32,

    /// Shortest interval reached (timer ticks).
    pub peak_interval: u32,

    /// Time from the request to the last pulse, in timer ticks.
    pub duration_ticks: u64,
}

impl RampProfile {
    /// Simulate a move of `steps` from standstill.
    ///
    /// The loop is bounded by the move length; this is a planning helper and
    /// must not be called from the tick handler.
    pub fn simulate(ramp: RampConfig, factor: VelocityFactor, steps: i32) -> Self {
        let mut core = RampCore::new(ramp, 1.0);
        core.set_velocity_factor(factor);

        let mut profile = Self::zero();
        let mut period = match core.request(steps) {
            Request::Start { period, .. } => period,
            _ => return profile,
        };
        profile.total_steps = steps.unsigned_abs();
        profile.peak_interval = period;

        loop {
            let phase = core.state();
            let outcome = core.tick();

            if outcome.stepped {
                profile.duration_ticks += period as u64;
                profile.peak_interval = profile.peak_interval.min(period);
                match phase {
                    MotionState::RampingUp => profile.accel_steps += 1,
                    MotionState::Running => profile.cruise_steps += 1,
                    MotionState::RampingDown => profile.decel_steps += 1,
                    MotionState::Stopped => {}
                }
            }

            match outcome.next {
                NextTick::Arm(next) => period = next,
                NextTick::Idle(_) => break,
            }
        }

        profile
    }

    /// Create a zero-length profile (no motion).
    pub fn zero() -> Self {
        Self {
            total_steps: 0,
            accel_steps: 0,
            cruise_steps: 0,
            decel_steps: 0,
            peak_interval: u32::MAX,
            duration_ticks: 0,
        }
    }

    /// Check if this is a zero-length profile.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_steps == 0
    }

    /// Check if the move reaches cruise speed.
    #[inline]
    pub fn is_trapezoidal(&self) -> bool {
        self.cruise_steps > 0
    }

    /// Duration in seconds for a timer counting at `timer_hz`.
    pub fn duration_secs(&self, timer_hz: u32) -> f32 {
        if timer_hz == 0 {
            return 0.0;
        }
        self.duration_ticks as f32 / timer_hz as f32
    }
}
