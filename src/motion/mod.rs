//! Motion module for stepper-ramp.
//!
//! Provides the ramp state machine, its interval arithmetic and an offline
//! profile preview. Nothing in here touches hardware.

mod direction;
mod machine;
mod position;
mod profile;
pub mod ramp;
mod state;

pub use direction::Direction;
pub use machine::{NextTick, PendingMove, RampCore, Request, TickOutcome};
pub use position::Position;
pub use profile::RampProfile;
pub use state::MotionState;
