//! Collaborator capabilities.
//!
//! One controller algorithm drives any axis through these three small
//! interfaces. An axis is a pair of values implementing [`PulseChannel`] and
//! [`TimingSource`]; there is no per-axis subclassing.

use crate::config::units::Steps;
use crate::error::Result;
use crate::motion::Direction;

/// Physical STEP/DIR signal path of one axis.
///
/// # Pulse width contract
///
/// `emit_step_pulse` must hold the STEP line active for at least the
/// driver's minimum pulse width before returning. How that is achieved (timer,
/// calibrated delay, hardware one-shot) is up to the implementation; the
/// controller never waits.
pub trait PulseChannel {
    /// Produce one step edge.
    fn emit_step_pulse(&mut self) -> Result<()>;

    /// Set the DIR line before the first pulse of a new segment.
    fn set_direction(&mut self, direction: Direction) -> Result<()>;
}

/// Single-shot periodic callback source of one axis.
///
/// `arm` schedules exactly one further invocation of the tick handler. The
/// source must run the handler at a higher priority than any other periodic
/// work; a missed or late tick is not detected by the controller.
pub trait TimingSource {
    /// Schedule the next tick `period` timer ticks from now.
    fn arm(&mut self, period: u32);

    /// Allow tick delivery.
    fn enable(&mut self);

    /// Stop tick delivery.
    fn disable(&mut self);

    /// Whether ticks are currently delivered.
    fn is_enabled(&self) -> bool;
}

/// Diagnostics sink notified when an axis comes to rest.
pub trait MotionObserver {
    /// Called from the tick handler with the resting position.
    fn motion_complete(&mut self, position: Steps);
}

/// No-op observer.
impl MotionObserver for () {
    #[inline]
    fn motion_complete(&mut self, _position: Steps) {}
}
