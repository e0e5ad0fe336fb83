//! Motor module for stepper-ramp.
//!
//! Binds the ramp state machine to per-axis collaborators: a pulse channel,
//! a timing source and an optional diagnostics observer.

mod builder;
mod controller;
mod guard;
mod pulse;
mod shared;
mod traits;

pub use builder::RampControllerBuilder;
pub use controller::RampController;
pub use guard::TickGuard;
pub use pulse::PinPulseChannel;
pub use shared::SharedController;
pub use traits::{MotionObserver, PulseChannel, TimingSource};
