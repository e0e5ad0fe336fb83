//! Property tests for the ramp state machine.

use proptest::prelude::*;
use stepper_ramp::motion::NextTick;
use stepper_ramp::{MotionState, RampConfig, RampCore, Steps, VelocityFactor};

fn core(factor: f32) -> RampCore {
    let mut core = RampCore::new(RampConfig::new(1600.0, 50.0), 1.0);
    core.set_velocity_factor(VelocityFactor::new(factor).unwrap());
    core
}

/// Tick until idle; returns the number of steps emitted.
fn run_to_rest(core: &mut RampCore) -> u32 {
    let mut steps = 0;
    for _ in 0..200_000 {
        let outcome = core.tick();
        if outcome.stepped {
            steps += 1;
        }
        if let NextTick::Idle(_) = outcome.next {
            return steps;
        }
    }
    panic!("core never came to rest");
}

proptest! {
    #[test]
    fn prop_single_move_lands_exactly(steps in -4_000i32..4_000) {
        let mut core = core(1.0);
        core.request(steps);
        let emitted = run_to_rest(&mut core);

        prop_assert_eq!(emitted, steps.unsigned_abs());
        prop_assert_eq!(core.position().steps(), Steps(steps as i64));
        prop_assert_eq!(core.state(), MotionState::Stopped);
    }

    #[test]
    fn prop_phase_invariants(steps in 1i32..3_000, factor in 1.0f32..8.0) {
        let mut core = core(factor);
        core.request(steps);
        let floor = core.ramp().cruise_floor(core.velocity_factor());

        loop {
            let phase = core.state();
            let (interval, index) = (core.interval(), core.ramp_step_index());
            let outcome = core.tick();

            prop_assert!(core.interval() <= 1600.0);
            prop_assert!(core.interval() >= 50.0);
            match phase {
                MotionState::RampingUp => {
                    prop_assert!(core.interval() <= interval);
                    prop_assert!(core.interval() >= floor.min(interval));
                    prop_assert_eq!(core.ramp_step_index(), index + 1);
                    if core.state() == MotionState::RampingDown {
                        let reach = core.steps_done() + core.ramp_step_index();
                        prop_assert!(reach >= core.target_steps());
                    }
                }
                MotionState::Running => {
                    prop_assert_eq!(core.interval(), interval);
                    prop_assert_eq!(core.ramp_step_index(), index);
                }
                MotionState::RampingDown => {
                    prop_assert!(core.interval() >= interval);
                    prop_assert!(core.ramp_step_index() <= index);
                }
                MotionState::Stopped => {}
            }
            prop_assert!(core.steps_done() <= core.target_steps());

            if let NextTick::Idle(_) = outcome.next {
                break;
            }
        }
    }

    #[test]
    fn prop_last_request_wins(
        schedule in prop::collection::vec((0usize..400, -2_000i32..2_000), 1..6),
    ) {
        let mut core = core(1.0);
        let mut expected = 0i64;

        for (gap, steps) in schedule {
            for _ in 0..gap {
                if let NextTick::Idle(_) = core.tick().next {
                    break;
                }
            }
            if steps != 0 {
                expected = core.position().steps().value() + steps as i64;
            }

            let estimate = core.estimate_steps_to_go(steps);
            core.request(steps);
            if steps != 0 {
                let mut ahead = core.clone();
                prop_assert_eq!(run_to_rest(&mut ahead), estimate);
            }
        }

        run_to_rest(&mut core);
        prop_assert_eq!(core.position().steps().value(), expected);
    }

    #[test]
    fn prop_throttle_changes_keep_landing_exact(
        steps in 500i32..6_000,
        changes in prop::collection::vec((1usize..800, 1.0f32..6.0), 1..5),
    ) {
        let mut core = core(1.0);
        core.request(steps);

        for (gap, factor) in changes {
            for _ in 0..gap {
                core.tick();
            }
            core.set_velocity_factor(VelocityFactor::new(factor).unwrap());
        }

        let mut previous = core.ramp_step_index();
        loop {
            let phase = core.state();
            let outcome = core.tick();
            prop_assert!(core.interval() >= 50.0 && core.interval() <= 1600.0);
            if phase == MotionState::Running {
                // Cruise adjustments move one ramp step at a time
                prop_assert!(core.ramp_step_index().abs_diff(previous) <= 1);
            }
            previous = core.ramp_step_index();
            if let NextTick::Idle(_) = outcome.next {
                break;
            }
        }
        prop_assert_eq!(core.position().steps(), Steps(steps as i64));
    }

    #[test]
    fn prop_direction_changes_only_at_rest(
        first in 100i32..2_000,
        gap in 1usize..100,
        second in -2_000i32..-1,
    ) {
        let mut core = core(1.0);
        core.request(first);
        for _ in 0..gap {
            core.tick();
        }
        core.request(second);

        let mut changes = 0;
        loop {
            let was_moving = core.state() != MotionState::Stopped;
            let before = core.position().steps();
            let outcome = core.tick();
            if outcome.direction_change.is_some() {
                changes += 1;
                // Adoption ticks never step
                prop_assert!(!outcome.stepped);
                prop_assert_eq!(core.position().steps(), before);
                prop_assert!(was_moving);
            }
            if let NextTick::Idle(_) = outcome.next {
                break;
            }
        }
        prop_assert_eq!(changes, 1);
    }
}
