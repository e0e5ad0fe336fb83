//! Single-axis example.
//!
//! Drives one ramp controller through a software timer: a plain move, a
//! mid-ramp reversal and a throttled move. The "interrupt" is a loop that
//! calls `on_tick` while the timer is enabled.
//!
//! Run with: `cargo run --example single_axis`

use stepper_ramp::{
    MotionState, PinPulseChannel, RampController, RampProfile, Request, TimingSource,
    VelocityFactor,
};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Mock output pin counting rising edges.
#[derive(Default)]
struct MockPin {
    state: bool,
    rising_edges: u32,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.state {
            self.rising_edges += 1;
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
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

type Axis = RampController<PinPulseChannel<MockPin, MockPin, MockDelay>, SoftTimer>;

/// Deliver ticks until the axis stops, advancing the simulated clock.
fn run_until_stopped(axis: &mut Axis) -> Result<(), stepper_ramp::Error> {
    let mut last_state = axis.state();
    let mut elapsed = 0u64;
    while axis.timer().is_enabled() {
        elapsed += u64::from(axis.timer().next_period);
        axis.on_tick()?;
        if axis.state() != last_state {
            println!(
                "  t={:>8}  {:<11} -> {:<11} pos={:>5} interval={:.1}",
                elapsed,
                last_state.name(),
                axis.state().name(),
                axis.position_steps().value(),
                axis.interval()
            );
            last_state = axis.state();
        }
    }
    println!("  stopped after {} timer ticks", elapsed);
    Ok(())
}

fn main() -> Result<(), stepper_ramp::Error> {
    println!("=== Single Axis Example ===\n");

    let channel = PinPulseChannel::new(MockPin::default(), MockPin::default(), MockDelay);
    let mut axis: Axis = RampController::builder()
        .name("x")
        .channel(channel)
        .timer(SoftTimer::default())
        .start_interval(1600.0)
        .min_interval(50.0)
        .build()?;

    println!("Axis '{}' created, state {}", axis.name(), axis.state().name());

    let preview = RampProfile::simulate(*axis.core().ramp(), VelocityFactor::FULL, 100);
    println!(
        "\nPreview of move(100): {} up / {} cruise / {} down, {} ticks",
        preview.accel_steps, preview.cruise_steps, preview.decel_steps, preview.duration_ticks
    );

    println!("\nmove(100):");
    axis.move_steps(100)?;
    run_until_stopped(&mut axis)?;

    println!("\nmove(50), then move(-30) after 10 steps:");
    axis.move_steps(50)?;
    for _ in 0..10 {
        axis.on_tick()?;
    }
    println!(
        "  estimate for move(-30): {} steps",
        axis.estimate_steps_to_go(-30)
    );
    if let Request::Reverse = axis.move_steps(-30)? {
        println!("  reversing, pending {:?}", axis.pending());
    }
    run_until_stopped(&mut axis)?;

    println!("\nmove(2000) at half speed:");
    axis.set_velocity_factor(2.0)?;
    axis.move_steps(2_000)?;
    run_until_stopped(&mut axis)?;

    assert_eq!(axis.state(), MotionState::Stopped);
    let (channel, _, _) = axis.release();
    let (step, _, _) = channel.release();
    println!("\nFinal: {} pulses emitted", step.rising_edges);

    println!("\n=== Example Complete ===");
    Ok(())
}
