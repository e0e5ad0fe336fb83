//! Two independent axes sharing one simulated clock.
//!
//! Each axis lives in a `static` [`SharedController`] the way it would on a
//! microcontroller, with its own timing source. The main loop plays the
//! role of the interrupt controller: it always services the axis whose
//! compare match is due first.
//!
//! Run with: `cargo run --example two_axis`

use stepper_ramp::{
    Error, MotionObserver, PinPulseChannel, RampController, SharedController, Steps,
    TimingSource,
};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Mock output pin for demonstration.
struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Software stand-in for a compare-match timer.
#[derive(Default)]
struct SoftTimer {
    enabled: bool,
    next_period: u32,
}

impl TimingSource for SoftTimer {
    fn arm(&mut self, period: u32) {
        self.next_period = period;
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

/// Prints the resting position of an axis.
struct Announce(&'static str);

impl MotionObserver for Announce {
    fn motion_complete(&mut self, position: Steps) {
        println!("  [{}] at rest, position {}", self.0, position.value());
    }
}

type Channel = PinPulseChannel<MockPin, MockPin, MockDelay>;
type Axis = SharedController<Channel, SoftTimer, Announce>;

static X_AXIS: Axis = SharedController::new();
static Y_AXIS: Axis = SharedController::new();

fn install(slot: &Axis, name: &'static str, start: f32, min: f32) -> Result<(), Error> {
    let axis = RampController::builder()
        .observer(Announce(name))
        .name(name)
        .channel(PinPulseChannel::new(MockPin, MockPin, MockDelay))
        .timer(SoftTimer::default())
        .start_interval(start)
        .min_interval(min)
        .build()?;
    slot.install(axis);
    Ok(())
}

/// Next compare match of an axis, if its timer is running.
fn deadline(axis: &Axis, now: u64) -> Option<u64> {
    axis.with(|a| {
        a.timer()
            .is_enabled()
            .then(|| now + u64::from(a.timer().next_period))
    })
    .flatten()
}

fn main() -> Result<(), Error> {
    println!("=== Two Axis Example ===\n");

    install(&X_AXIS, "x", 1600.0, 50.0)?;
    install(&Y_AXIS, "y", 2400.0, 120.0)?;

    X_AXIS.move_steps(800)?;
    Y_AXIS.move_steps(-300)?;

    let axes = [&X_AXIS, &Y_AXIS];
    let mut deadlines = [deadline(&X_AXIS, 0), deadline(&Y_AXIS, 0)];
    let mut now = 0u64;
    let mut retargeted = false;

    while let Some((index, due)) = deadlines
        .iter()
        .enumerate()
        .filter_map(|(i, d)| d.map(|d| (i, d)))
        .min_by_key(|&(_, d)| d)
    {
        now = due;
        axes[index].on_tick()?;
        deadlines[index] = deadline(axes[index], now);

        // Halfway through, send Y back the other way
        if !retargeted && now > 100_000 {
            retargeted = true;
            let estimate = Y_AXIS.estimate_steps_to_go(500).unwrap_or(0);
            println!("  t={} y: move(500), {} steps to go", now, estimate);
            Y_AXIS.move_steps(500)?;
            if deadlines[1].is_none() {
                deadlines[1] = deadline(&Y_AXIS, now);
            }
        }
    }

    println!("\nAll axes stopped at t={}", now);
    for (name, axis) in [("x", &X_AXIS), ("y", &Y_AXIS)] {
        if let Some(position) = axis.with(|a| a.position_steps()) {
            println!("  {}: {} steps", name, position.value());
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
