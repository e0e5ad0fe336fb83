//! Controller shared between a tick interrupt and foreground code.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::error::{MotionError, Result};
use crate::motion::{Request, TickOutcome};

use super::controller::RampController;
use super::traits::{MotionObserver, PulseChannel, TimingSource};

/// A [`RampController`] slot usable from a `static`.
///
/// Each access runs inside a critical section, so the tick handler and the
/// motion request never interleave. The slot starts empty; install the
/// controller once the peripherals are configured.
///
/// ```rust,ignore
/// static X_AXIS: SharedController<XChannel, XTimer> = SharedController::new();
///
/// #[interrupt]
/// fn TIMER1_COMPA() {
///     let _ = X_AXIS.on_tick();
/// }
/// ```
pub struct SharedController<C, T, O = ()>
where
    C: PulseChannel,
    T: TimingSource,
    O: MotionObserver,
{
    inner: Mutex<RefCell<Option<RampController<C, T, O>>>>,
}

impl<C, T, O> SharedController<C, T, O>
where
    C: PulseChannel,
    T: TimingSource,
    O: MotionObserver,
{
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install a controller, returning the previous one.
    pub fn install(&self, controller: RampController<C, T, O>) -> Option<RampController<C, T, O>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(controller))
    }

    /// Remove the controller.
    pub fn take(&self) -> Option<RampController<C, T, O>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Run `f` on the installed controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut RampController<C, T, O>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Tick handler entry point.
    pub fn on_tick(&self) -> Result<TickOutcome> {
        self.with(|c| c.on_tick())
            .unwrap_or(Err(MotionError::NotInstalled.into()))
    }

    /// Relative motion request from foreground code.
    pub fn move_steps(&self, steps: i32) -> Result<Request> {
        self.with(|c| c.move_steps(steps))
            .unwrap_or(Err(MotionError::NotInstalled.into()))
    }

    /// Pre-flight estimate; `None` if no controller is installed.
    pub fn estimate_steps_to_go(&self, steps: i32) -> Option<u32> {
        self.with(|c| c.estimate_steps_to_go(steps))
    }
}

impl<C, T, O> Default for SharedController<C, T, O>
where
    C: PulseChannel,
    T: TimingSource,
    O: MotionObserver,
{
    fn default() -> Self {
        Self::new()
    }
}
