//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use stepper_ramp::motion::NextTick;
use stepper_ramp::{
    Direction, MotionObserver, MotionState, PulseChannel, RampController, Result, Steps,
    TimingSource,
};

/// Pulse channel that records every call.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    pub pulses: u32,
    pub directions: Vec<Direction>,
    pub fail_step: bool,
    /// Number of upcoming DIR writes to reject.
    pub fail_direction: u32,
}

impl PulseChannel for RecordingChannel {
    fn emit_step_pulse(&mut self) -> Result<()> {
        if self.fail_step {
            return Err(stepper_ramp::error::MotorError::StepPinError.into());
        }
        self.pulses += 1;
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.fail_direction > 0 {
            self.fail_direction -= 1;
            return Err(stepper_ramp::error::MotorError::DirectionPinError.into());
        }
        self.directions.push(direction);
        Ok(())
    }
}

/// Timing source that records armed periods and the enable line.
#[derive(Debug, Default)]
pub struct SoftTimer {
    pub enabled: bool,
    pub periods: Vec<u32>,
}

impl TimingSource for SoftTimer {
    fn arm(&mut self, period: u32) {
        self.periods.push(period);
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Observer collecting resting positions.
#[derive(Debug, Default)]
pub struct Stops(pub Vec<Steps>);

impl MotionObserver for Stops {
    fn motion_complete(&mut self, position: Steps) {
        self.0.push(position);
    }
}

/// One tick as seen from outside the controller.
#[derive(Debug, Clone, Copy)]
pub struct TickRecord {
    pub state: MotionState,
    pub interval: f32,
    pub index: u32,
    pub steps_done: u32,
    pub stepped: bool,
}

pub type TestAxis<O = ()> = RampController<RecordingChannel, SoftTimer, O>;

pub fn axis(start: f32, min: f32) -> TestAxis {
    RampController::builder()
        .name("test")
        .channel(RecordingChannel::default())
        .timer(SoftTimer::default())
        .start_interval(start)
        .min_interval(min)
        .steps_per_mm(1.0)
        .build()
        .unwrap()
}

/// Deliver ticks while the timer is enabled, recording each one.
pub fn run<O: MotionObserver>(axis: &mut TestAxis<O>, limit: usize) -> Vec<TickRecord> {
    let mut records = Vec::new();
    while axis.timer().enabled {
        assert!(records.len() < limit, "axis never came to rest");
        let outcome = axis.on_tick().unwrap();
        records.push(TickRecord {
            state: axis.state(),
            interval: axis.interval(),
            index: axis.ramp_step_index(),
            steps_done: axis.steps_done(),
            stepped: outcome.stepped,
        });
        if let NextTick::Idle(_) = outcome.next {
            assert!(!axis.timer().enabled);
        }
    }
    records
}

/// Deliver exactly `count` ticks.
pub fn tick_n<O: MotionObserver>(axis: &mut TestAxis<O>, count: usize) {
    for _ in 0..count {
        axis.on_tick().unwrap();
    }
}

/// States with consecutive duplicates removed.
pub fn phases(records: &[TickRecord]) -> Vec<MotionState> {
    let mut phases: Vec<MotionState> = Vec::new();
    for record in records {
        if phases.last() != Some(&record.state) {
            phases.push(record.state);
        }
    }
    phases
}
