//! Ramp controller bound to one axis.
//!
//! [`RampController`] joins the collaborator-free [`RampCore`] to a pulse
//! channel, a timing source and an optional diagnostics observer.

use crate::config::units::{Millimeters, Steps, VelocityFactor};
use crate::config::RampConfig;
use crate::error::{MotionError, Result};
use crate::motion::{
    Direction, MotionState, NextTick, PendingMove, Position, RampCore, Request, TickOutcome,
};

use super::builder::RampControllerBuilder;
use super::guard::TickGuard;
use super::traits::{MotionObserver, PulseChannel, TimingSource};

/// Interrupt-driven trapezoidal ramp controller for one axis.
///
/// Generic over:
/// - `C`: pulse channel driving the STEP/DIR lines
/// - `T`: single-shot timing source calling [`on_tick`](Self::on_tick)
/// - `O`: observer notified when the axis comes to rest (defaults to `()`)
///
/// `on_tick` is meant to run inside the timing source's callback; `move_steps`
/// from any foreground context. Both take `&mut self`; to share one controller
/// between an interrupt and foreground code wrap it in
/// [`SharedController`](super::SharedController).
pub struct RampController<C, T, O = ()>
where
    C: PulseChannel,
    T: TimingSource,
    O: MotionObserver,
{
    /// Axis name for logging/debugging.
    name: heapless::String<32>,

    /// STEP/DIR signal path.
    channel: C,

    /// Tick scheduler.
    timer: T,

    /// Diagnostics sink.
    observer: O,

    /// Ramp state machine.
    core: RampCore,

    /// A tick aborted on a pin error and nothing re-armed the source.
    stalled: bool,
}

impl<C, T, O> RampController<C, T, O>
where
    C: PulseChannel,
    T: TimingSource,
    O: MotionObserver,
{
    /// Create a stopped controller at the origin.
    pub(crate) fn new(
        name: heapless::String<32>,
        channel: C,
        timer: T,
        observer: O,
        ramp: RampConfig,
        steps_per_mm: f32,
        velocity_factor: VelocityFactor,
    ) -> Self {
        let mut core = RampCore::new(ramp, steps_per_mm);
        core.set_velocity_factor(velocity_factor);
        Self {
            name,
            channel,
            timer,
            observer,
            core,
            stalled: false,
        }
    }

    /// Handle one timing-source tick.
    ///
    /// Emits at most one pulse, advances the ramp and re-arms the timing
    /// source, or disables it once the axis is at rest with nothing queued.
    ///
    /// # Errors
    ///
    /// A failed STEP pulse, or a failed DIR write while adopting a queued
    /// motion, aborts the tick before any state changes and leaves the timing
    /// source un-armed. The next accepted [`move_steps`](Self::move_steps)
    /// re-arms it.
    pub fn on_tick(&mut self) -> Result<TickOutcome> {
        if let Err(e) = self.pin_io() {
            self.stalled = true;
            return Err(e);
        }
        self.stalled = false;

        let outcome = self.core.tick();

        #[cfg(feature = "defmt")]
        if let Some(direction) = outcome.direction_change {
            defmt::debug!(
                "{}: queued move of {} steps {}",
                self.name.as_str(),
                self.core.target_steps(),
                direction
            );
        }

        match outcome.next {
            NextTick::Arm(period) => self.timer.arm(period),
            NextTick::Idle(position) => {
                self.timer.disable();
                #[cfg(feature = "defmt")]
                defmt::debug!("{}: stopped at {}", self.name.as_str(), position.value());
                self.observer.motion_complete(position);
            }
        }

        Ok(outcome)
    }

    /// Pin writes owed by the coming tick, done before the core commits.
    fn pin_io(&mut self) -> Result<()> {
        if self.core.step_due() {
            self.channel.emit_step_pulse()?;
        } else if let Some(direction) = self.core.adoption_due() {
            self.channel.set_direction(direction)?;
        }
        Ok(())
    }

    /// Request a relative move of `steps` (sign selects the direction).
    ///
    /// May be called at any time. Ticks are suppressed while the targets are
    /// rewritten; a non-zero request always leaves the timing source enabled.
    /// Zero is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the DIR pin error when starting from rest. The axis then stays
    /// stopped and the timing source is left as it was.
    pub fn move_steps(&mut self, steps: i32) -> Result<Request> {
        let mut timer = TickGuard::new(&mut self.timer);

        if self.core.state() == MotionState::Stopped {
            if let Some(direction) = Direction::from_steps(i64::from(steps)) {
                self.channel.set_direction(direction)?;
            }
        }

        let request = self.core.request(steps);
        match request {
            Request::Ignored => return Ok(request),
            Request::Start { period, .. } => {
                timer.arm(period);
                #[cfg(feature = "defmt")]
                defmt::debug!("{}: start {} steps", self.name.as_str(), steps);
            }
            Request::Retarget => {}
            Request::Overshoot { .. } => {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "{}: overshoot, then {}",
                    self.name.as_str(),
                    self.core.pending()
                );
            }
            Request::Reverse => {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "{}: reversing after {} steps",
                    self.name.as_str(),
                    self.core.target_steps()
                );
            }
        }

        if self.stalled {
            if !matches!(request, Request::Start { .. }) {
                timer.arm(self.core.period());
            }
            self.stalled = false;
        }

        timer.resume();
        Ok(request)
    }

    /// Move to an absolute step position.
    ///
    /// # Errors
    ///
    /// `MotionError::DistanceOverflow` if the distance does not fit an `i32`.
    pub fn move_to(&mut self, target: Steps) -> Result<Request> {
        let delta = self.core.position().steps_to(target);
        let steps = i32::try_from(delta).map_err(|_| MotionError::DistanceOverflow(delta))?;
        self.move_steps(steps)
    }

    /// Move by a distance in millimetres.
    pub fn move_mm(&mut self, distance: Millimeters) -> Result<Request> {
        let delta = self.core.position().steps_for(distance);
        let steps = i32::try_from(delta).map_err(|_| MotionError::DistanceOverflow(delta))?;
        self.move_steps(steps)
    }

    /// Steps the axis would still travel if `move_steps(steps)` were issued now.
    #[inline]
    pub fn estimate_steps_to_go(&self, steps: i32) -> u32 {
        self.core.estimate_steps_to_go(steps)
    }

    /// Throttle the cruise speed.
    ///
    /// Applies at the next interval recomputation; the period already
    /// programmed is left alone.
    ///
    /// # Errors
    ///
    /// `MotionError::InvalidVelocityFactor` unless `factor` is finite and > 0.
    pub fn set_velocity_factor(&mut self, factor: f32) -> Result<()> {
        let factor = VelocityFactor::new(factor)?;
        self.core.set_velocity_factor(factor);
        Ok(())
    }

    /// Overwrite the absolute position (e.g. after homing).
    pub fn set_position(&mut self, position: Steps) {
        let _timer = TickGuard::new(&mut self.timer);
        self.core.set_position(position);
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current phase.
    #[inline]
    pub fn state(&self) -> MotionState {
        self.core.state()
    }

    /// Check if the axis is moving.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.core.state().is_moving()
    }

    /// Current commanded direction.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.core.direction()
    }

    /// Motion queued behind the current deceleration.
    #[inline]
    pub fn pending(&self) -> Option<PendingMove> {
        self.core.pending()
    }

    /// Absolute position.
    #[inline]
    pub fn position(&self) -> Position {
        *self.core.position()
    }

    /// Absolute position in steps.
    #[inline]
    pub fn position_steps(&self) -> Steps {
        self.core.position().steps()
    }

    /// Current interval in fractional timer ticks.
    #[inline]
    pub fn interval(&self) -> f32 {
        self.core.interval()
    }

    /// Ramp step index.
    #[inline]
    pub fn ramp_step_index(&self) -> u32 {
        self.core.ramp_step_index()
    }

    /// Steps completed toward the current target.
    #[inline]
    pub fn steps_done(&self) -> u32 {
        self.core.steps_done()
    }

    /// Step count of the in-progress motion.
    #[inline]
    pub fn target_steps(&self) -> u32 {
        self.core.target_steps()
    }

    /// Current velocity factor.
    #[inline]
    pub fn velocity_factor(&self) -> VelocityFactor {
        self.core.velocity_factor()
    }

    /// The underlying state machine.
    #[inline]
    pub fn core(&self) -> &RampCore {
        &self.core
    }

    /// Borrow the pulse channel.
    #[inline]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Mutably borrow the pulse channel.
    #[inline]
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Borrow the timing source.
    #[inline]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Borrow the observer.
    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Release the collaborators.
    pub fn release(self) -> (C, T, O) {
        (self.channel, self.timer, self.observer)
    }
}

impl<C, T> RampController<C, T>
where
    C: PulseChannel,
    T: TimingSource,
{
    /// Start building a controller.
    pub fn builder() -> RampControllerBuilder<C, T> {
        RampControllerBuilder::new()
    }
}
