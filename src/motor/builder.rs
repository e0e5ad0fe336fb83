//! Builder pattern for RampController.

use crate::config::units::VelocityFactor;
use crate::config::{validate_ramp, AxisConfig, RampConfig, SystemConfig, DEFAULT_STEPS_PER_MM};
use crate::error::{ConfigError, Error, Result};

use super::controller::RampController;
use super::traits::{MotionObserver, PulseChannel, TimingSource};

/// Builder for creating RampController instances.
pub struct RampControllerBuilder<C, T, O = ()>
where
    C: PulseChannel,
    T: TimingSource,
    O: MotionObserver,
{
    channel: Option<C>,
    timer: Option<T>,
    observer: O,
    name: Option<heapless::String<32>>,
    ramp: RampConfig,
    steps_per_mm: f32,
    velocity_factor: VelocityFactor,
}

impl<C, T> Default for RampControllerBuilder<C, T, ()>
where
    C: PulseChannel,
    T: TimingSource,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> RampControllerBuilder<C, T, ()>
where
    C: PulseChannel,
    T: TimingSource,
{
    /// Create a new builder with the default ramp and no observer.
    pub fn new() -> Self {
        Self {
            channel: None,
            timer: None,
            observer: (),
            name: None,
            ramp: RampConfig::default(),
            steps_per_mm: DEFAULT_STEPS_PER_MM,
            velocity_factor: VelocityFactor::FULL,
        }
    }
}

impl<C, T, O> RampControllerBuilder<C, T, O>
where
    C: PulseChannel,
    T: TimingSource,
    O: MotionObserver,
{
    /// Set the pulse channel.
    pub fn channel(mut self, channel: C) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Set the timing source.
    pub fn timer(mut self, timer: T) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Set the diagnostics observer.
    pub fn observer<P: MotionObserver>(self, observer: P) -> RampControllerBuilder<C, T, P> {
        RampControllerBuilder {
            channel: self.channel,
            timer: self.timer,
            observer,
            name: self.name,
            ramp: self.ramp,
            steps_per_mm: self.steps_per_mm,
            velocity_factor: self.velocity_factor,
        }
    }

    /// Set the axis name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the interval of the first step out of standstill.
    pub fn start_interval(mut self, interval: f32) -> Self {
        self.ramp.start_interval = interval;
        self
    }

    /// Set the cruise interval floor.
    pub fn min_interval(mut self, interval: f32) -> Self {
        self.ramp.min_interval = interval;
        self
    }

    /// Set both ramp bounds.
    pub fn ramp(mut self, ramp: RampConfig) -> Self {
        self.ramp = ramp;
        self
    }

    /// Set steps per millimetre.
    pub fn steps_per_mm(mut self, steps_per_mm: f32) -> Self {
        self.steps_per_mm = steps_per_mm;
        self
    }

    /// Set the initial velocity factor.
    pub fn velocity_factor(mut self, factor: VelocityFactor) -> Self {
        self.velocity_factor = factor;
        self
    }

    /// Configure from an AxisConfig.
    ///
    /// The channel is built separately; `invert_direction` and
    /// `pulse_width_ns` belong to it.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.name = Some(config.name.clone());
        self.ramp = config.ramp;
        self.steps_per_mm = config.steps_per_mm;
        self.velocity_factor = config.velocity_factor;
        self
    }

    /// Configure from SystemConfig by axis name.
    pub fn from_config(self, config: &SystemConfig, axis_name: &str) -> Result<Self> {
        let axis_config = config.axis(axis_name).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                heapless::String::try_from(axis_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_axis_config(axis_config))
    }

    /// Build the RampController.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel or timer is missing, or the ramp or
    /// scale is invalid.
    pub fn build(self) -> Result<RampController<C, T, O>> {
        let channel = self
            .channel
            .ok_or(Error::Config(ConfigError::MissingField("channel")))?;
        let timer = self
            .timer
            .ok_or(Error::Config(ConfigError::MissingField("timer")))?;

        validate_ramp(&self.ramp)?;

        if !self.steps_per_mm.is_finite() || self.steps_per_mm <= 0.0 {
            return Err(Error::Config(ConfigError::InvalidStepsPerMm(
                self.steps_per_mm,
            )));
        }

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("axis").unwrap_or_default());

        Ok(RampController::new(
            name,
            channel,
            timer,
            self.observer,
            self.ramp,
            self.steps_per_mm,
            self.velocity_factor,
        ))
    }
}
