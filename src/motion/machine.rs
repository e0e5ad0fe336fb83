//! Collaborator-free ramp state machine.
//!
//! [`RampCore`] owns every field the tick handler and the motion request
//! mutate. It never touches hardware: each call reports what the caller must
//! do (pulse, set direction, arm, stop) and the motor layer performs it.

use crate::config::units::{Steps, VelocityFactor};
use crate::config::RampConfig;

use super::direction::Direction;
use super::position::Position;
use super::ramp::{accelerate, decelerate, to_period};
use super::state::MotionState;

/// A motion queued behind a deceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingMove {
    /// Direction of the queued motion.
    pub direction: Direction,
    /// Step count of the queued motion (always > 0).
    pub steps: u32,
}

impl PendingMove {
    fn new(direction: Direction, steps: u32) -> Option<Self> {
        (steps > 0).then_some(Self { direction, steps })
    }
}

/// What the timing source must do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NextTick {
    /// Schedule the next tick after this many timer ticks.
    Arm(u32),
    /// Motion complete; disable ticks. Carries the resting position.
    Idle(Steps),
}

/// Result of one tick of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// A step was taken this tick.
    pub stepped: bool,
    /// A queued motion was adopted; the DIR line must be set before the next pulse.
    pub direction_change: Option<Direction>,
    /// Scheduling instruction for the timing source.
    pub next: NextTick,
}

/// How a motion request was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    /// Zero distance; nothing changed.
    Ignored,
    /// Fresh ramp out of standstill.
    Start {
        /// Direction to program before the first pulse.
        direction: Direction,
        /// Period of the first tick.
        period: u32,
    },
    /// Same direction, target moved without disturbing the ramp phase.
    Retarget,
    /// Same direction but closer than the axis can stop: decelerate, then
    /// come back by the overshoot.
    Overshoot {
        /// Steps travelled past the requested target before returning.
        overshoot: u32,
    },
    /// Opposite direction: decelerate, then run the queued motion.
    Reverse,
}

/// Ramp state machine.
#[derive(Debug, Clone)]
pub struct RampCore {
    ramp: RampConfig,
    velocity_factor: VelocityFactor,
    state: MotionState,
    direction: Option<Direction>,
    pending: Option<PendingMove>,
    ramp_step_index: u32,
    interval: f32,
    steps_done: u32,
    target_steps: u32,
    position: Position,
}

impl RampCore {
    /// Create a stopped state machine at the origin.
    pub fn new(ramp: RampConfig, steps_per_mm: f32) -> Self {
        Self {
            ramp,
            velocity_factor: VelocityFactor::FULL,
            state: MotionState::Stopped,
            direction: None,
            pending: None,
            ramp_step_index: 0,
            interval: ramp.start_interval,
            steps_done: 0,
            target_steps: 0,
            position: Position::new(steps_per_mm),
        }
    }

    /// Ramp interval bounds.
    #[inline]
    pub fn ramp(&self) -> &RampConfig {
        &self.ramp
    }

    /// Current phase.
    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Current commanded direction; `None` before the first move.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Motion queued behind the current deceleration.
    #[inline]
    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    /// Ramp step index (n).
    #[inline]
    pub fn ramp_step_index(&self) -> u32 {
        self.ramp_step_index
    }

    /// Current interval (d) in fractional timer ticks.
    #[inline]
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Steps completed toward the current target.
    #[inline]
    pub fn steps_done(&self) -> u32 {
        self.steps_done
    }

    /// Step count of the in-progress motion.
    #[inline]
    pub fn target_steps(&self) -> u32 {
        self.target_steps
    }

    /// Absolute position.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Overwrite the absolute position (homing).
    #[inline]
    pub fn set_position(&mut self, steps: Steps) {
        self.position.set_steps(steps);
    }

    /// Current velocity factor.
    #[inline]
    pub fn velocity_factor(&self) -> VelocityFactor {
        self.velocity_factor
    }

    /// Store a new velocity factor.
    ///
    /// A cruising axis walks its interval to the new floor one ramp step per
    /// tick, so the stopping distance stays in step with the speed.
    #[inline]
    pub fn set_velocity_factor(&mut self, factor: VelocityFactor) {
        self.velocity_factor = factor;
    }

    /// Steps left in the in-progress motion.
    #[inline]
    pub fn remaining_steps(&self) -> u32 {
        self.target_steps.saturating_sub(self.steps_done)
    }

    /// Whether the next tick emits a pulse.
    #[inline]
    pub fn step_due(&self) -> bool {
        self.steps_done < self.target_steps
    }

    /// Timer period for the current interval.
    #[inline]
    pub fn period(&self) -> u32 {
        to_period(self.interval)
    }

    /// Steps the axis must still travel in its current direction before it
    /// can be at rest.
    pub fn committed_steps(&self) -> u32 {
        match self.state {
            MotionState::Stopped => 0,
            MotionState::RampingUp | MotionState::Running => self.ramp_step_index,
            MotionState::RampingDown => self.remaining_steps(),
        }
    }

    /// Advance the state machine by one tick.
    ///
    /// Runs in bounded time: no loops, no allocation.
    pub fn tick(&mut self) -> TickOutcome {
        let stepped = if self.step_due() {
            self.steps_done += 1;
            if let Some(direction) = self.direction {
                self.position.move_steps(direction.sign());
            }
            true
        } else {
            self.state = MotionState::Stopped;
            false
        };

        let mut direction_change = None;

        match self.state {
            MotionState::Stopped => match self.pending.take() {
                Some(next) => {
                    self.begin(next.direction, next.steps);
                    direction_change = Some(next.direction);
                }
                None => {
                    return TickOutcome {
                        stepped,
                        direction_change: None,
                        next: NextTick::Idle(self.position.steps()),
                    };
                }
            },
            MotionState::RampingUp => self.ramp_up(),
            MotionState::Running => {
                let floor = self.ramp.cruise_floor(self.velocity_factor);
                if self.interval > floor {
                    // Throttle released
                    self.state = MotionState::RampingUp;
                    self.ramp_up();
                } else {
                    if self.interval < floor {
                        self.ramp_step_index = self.ramp_step_index.saturating_sub(1);
                        self.interval =
                            decelerate(self.interval, self.ramp_step_index).min(floor);
                    }
                    if self.remaining_steps() <= self.ramp_step_index {
                        self.state = MotionState::RampingDown;
                    }
                }
            }
            MotionState::RampingDown => {
                self.ramp_step_index = self.ramp_step_index.saturating_sub(1);
                self.interval = decelerate(self.interval, self.ramp_step_index)
                    .min(self.ramp.start_interval);
            }
        }

        TickOutcome {
            stepped,
            direction_change,
            next: NextTick::Arm(self.period()),
        }
    }

    /// Apply a relative motion request.
    ///
    /// The sign of `steps` selects the direction, the magnitude the distance
    /// from the current position. Zero is a no-op.
    pub fn request(&mut self, steps: i32) -> Request {
        let Some(direction) = Direction::from_steps(steps as i64) else {
            return Request::Ignored;
        };
        let magnitude = steps.unsigned_abs();

        if self.state == MotionState::Stopped {
            self.pending = None;
            self.begin(direction, magnitude);
            return Request::Start {
                direction,
                period: self.period(),
            };
        }

        let committed = self.committed_steps();

        if self.direction == Some(direction) {
            if magnitude >= committed {
                self.pending = None;
                self.target_steps = magnitude;
                self.steps_done = 0;
                if self.state == MotionState::RampingDown && magnitude > self.ramp_step_index {
                    self.state = MotionState::RampingUp;
                }
                return Request::Retarget;
            }

            let overshoot = committed - magnitude;
            self.force_deceleration(committed);
            self.pending = PendingMove::new(direction.opposite(), overshoot);
            return Request::Overshoot { overshoot };
        }

        self.force_deceleration(committed);
        self.pending = PendingMove::new(direction, magnitude.saturating_add(committed));
        Request::Reverse
    }

    /// Total steps the axis would still travel if `request(steps)` were
    /// applied now. Does not mutate.
    pub fn estimate_steps_to_go(&self, steps: i32) -> u32 {
        let Some(direction) = Direction::from_steps(steps as i64) else {
            let queued = self.pending.map_or(0, |p| p.steps);
            return self.remaining_steps().saturating_add(queued);
        };
        let magnitude = steps.unsigned_abs();

        if self.state == MotionState::Stopped {
            return magnitude;
        }

        let committed = self.committed_steps();
        if self.direction == Some(direction) {
            if magnitude >= committed {
                magnitude
            } else {
                committed + (committed - magnitude)
            }
        } else {
            committed
                .saturating_add(magnitude)
                .saturating_add(committed)
        }
    }

    /// Direction the next tick adopts from the pending move, if any.
    ///
    /// The DIR line must show this direction before [`tick`](Self::tick)
    /// commits to it.
    pub fn adoption_due(&self) -> Option<Direction> {
        if self.step_due() {
            return None;
        }
        self.pending.map(|next| next.direction)
    }

    fn ramp_up(&mut self) {
        self.ramp_step_index += 1;
        let previous = self.interval;
        self.interval = accelerate(previous, self.ramp_step_index);

        let floor = self.ramp.cruise_floor(self.velocity_factor);
        if self.interval <= floor {
            self.interval = floor.min(previous);
            self.state = MotionState::Running;
        }

        // No room to reach or hold cruise speed
        if self.ramp_step_index >= self.remaining_steps() {
            self.state = MotionState::RampingDown;
        }
    }

    fn begin(&mut self, direction: Direction, steps: u32) {
        self.direction = Some(direction);
        self.target_steps = steps;
        self.steps_done = 0;
        self.ramp_step_index = 0;
        self.interval = self.ramp.start_interval;
        self.state = MotionState::RampingUp;
    }

    fn force_deceleration(&mut self, committed: u32) {
        self.target_steps = committed;
        self.steps_done = 0;
        self.state = MotionState::RampingDown;
    }
}
