//! Example: Configuration-driven axes.
//!
//! This example demonstrates how to:
//! - Load axis configuration from TOML
//! - Build one controller per configured axis
//! - Preview ramp profiles before moving
//! - Command moves in millimetres
//!
//! Run with: `cargo run --example config_driven --features std`

use stepper_ramp::{
    parse_config, Millimeters, PinPulseChannel, RampController, RampProfile, Result,
    TimingSource,
};

/// Mock pin for demonstration.
struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Mock delay for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        // In real code, this would actually delay
    }
}

/// Timer that only tracks its enable line.
#[derive(Default)]
struct FlagTimer {
    enabled: bool,
}

impl TimingSource for FlagTimer {
    fn arm(&mut self, _period: u32) {}

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

/// Timer frequency of the reference board (16 MHz / 8 prescaler).
const TIMER_HZ: u32 = 2_000_000;

fn main() -> Result<()> {
    println!("=== Configuration-Driven Example ===\n");

    let toml_content = r#"
# Belt-driven carriage
[axes.x]
name = "carriage"
steps_per_mm = 80.0
pulse_width_ns = 2500

[axes.x.ramp]
start_interval = 1600.0
min_interval = 50.0

# Leadscrew lift, inverted wiring, throttled
[axes.z]
name = "lift"
invert_direction = true
steps_per_mm = 400.0
velocity_factor = 2.0

[axes.z.ramp]
start_interval = 3000.0
min_interval = 150.0
"#;

    let config = parse_config(toml_content)?;

    println!("Axis Configuration:");
    for key in config.axis_names() {
        if let Some(axis) = config.axis(key) {
            println!(
                "  - {} ({}): {:.1} steps/mm, ramp {} -> {}, factor {}",
                key,
                axis.name,
                axis.steps_per_mm,
                axis.ramp.start_interval,
                axis.ramp.min_interval,
                axis.velocity_factor.value()
            );
        }
    }
    println!();

    let moves = [("x", Millimeters(25.0)), ("z", Millimeters(-2.5))];

    println!("Profile Previews:");
    println!("{}", "-".repeat(60));
    for (key, distance) in moves {
        if let Some(axis) = config.axis(key) {
            let steps = axis.mm_to_steps(distance).value() as i32;
            let profile = RampProfile::simulate(axis.ramp, axis.velocity_factor, steps);
            let shape = if profile.is_trapezoidal() {
                ""
            } else {
                " (triangular)"
            };
            println!(
                "  {} {:>6.1} mm = {:>6} steps: {:>5} up, {:>5} cruise, {:>5} down, {:.3} s{}",
                key,
                distance.value(),
                steps,
                profile.accel_steps,
                profile.cruise_steps,
                profile.decel_steps,
                profile.duration_secs(TIMER_HZ),
                shape
            );
        }
    }
    println!();

    println!("Executing:");
    for (key, distance) in moves {
        let Some(axis_config) = config.axis(key) else {
            continue;
        };

        let channel = PinPulseChannel::new(MockPin, MockPin, MockDelay)
            .with_pulse_width_ns(axis_config.pulse_width_ns)
            .with_inverted_direction(axis_config.invert_direction);

        let mut axis = RampController::builder()
            .channel(channel)
            .timer(FlagTimer::default())
            .from_config(&config, key)?
            .build()?;

        axis.move_mm(distance)?;
        let mut ticks = 0u32;
        while axis.timer().is_enabled() {
            axis.on_tick()?;
            ticks += 1;
        }

        println!(
            "  {}: {} ticks, now at {} steps ({:.3} mm)",
            axis.name(),
            ticks,
            axis.position_steps().value(),
            axis.position().millimeters().value()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
