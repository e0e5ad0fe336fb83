//! Direction of travel.

use embedded_hal::digital::PinState;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Positive step count.
    Forward,
    /// Negative step count.
    Reverse,
}

impl Direction {
    /// Get direction from a signed step count. Zero has no direction.
    #[inline]
    pub fn from_steps(steps: i64) -> Option<Self> {
        match steps {
            0 => None,
            s if s > 0 => Some(Direction::Forward),
            _ => Some(Direction::Reverse),
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// DIR line level for this direction.
    ///
    /// Reverse drives the line high unless `invert` is set.
    #[inline]
    pub fn pin_state(self, invert: bool) -> PinState {
        let high = matches!(self, Direction::Reverse) != invert;
        PinState::from(high)
    }
}
