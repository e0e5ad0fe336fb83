//! STEP/DIR pulse channel over embedded-hal pins.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::DEFAULT_PULSE_WIDTH_NS;
use crate::error::{MotorError, Result};
use crate::motion::Direction;

use super::traits::PulseChannel;

/// Pulse channel generic over embedded-hal 1.0 pin types.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider holding STEP high for the pulse width
pub struct PinPulseChannel<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = reverse, unless inverted).
    dir_pin: DIR,

    /// Delay provider for the pulse width.
    delay: DELAY,

    /// Minimum STEP high time in nanoseconds.
    pulse_width_ns: u32,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,
}

impl<STEP, DIR, DELAY> PinPulseChannel<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a channel with the default pulse width.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            pulse_width_ns: DEFAULT_PULSE_WIDTH_NS,
            invert_direction: false,
            current_direction: None,
        }
    }

    /// Set the minimum STEP high time.
    pub fn with_pulse_width_ns(mut self, pulse_width_ns: u32) -> Self {
        self.pulse_width_ns = pulse_width_ns;
        self
    }

    /// Set direction inversion.
    pub fn with_inverted_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Minimum STEP high time in nanoseconds.
    #[inline]
    pub fn pulse_width_ns(&self) -> u32 {
        self.pulse_width_ns
    }

    /// Last direction written to the DIR pin.
    #[inline]
    pub fn current_direction(&self) -> Option<Direction> {
        self.current_direction
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }
}

impl<STEP, DIR, DELAY> PulseChannel for PinPulseChannel<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn emit_step_pulse(&mut self) -> Result<()> {
        self.step_pin
            .set_high()
            .map_err(|_| MotorError::StepPinError)?;
        self.delay.delay_ns(self.pulse_width_ns);
        self.step_pin
            .set_low()
            .map_err(|_| MotorError::StepPinError)?;
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        self.dir_pin
            .set_state(direction.pin_state(self.invert_direction))
            .map_err(|_| MotorError::DirectionPinError)?;

        self.current_direction = Some(direction);
        Ok(())
    }
}
