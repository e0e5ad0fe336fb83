//! Incremental interval arithmetic.
//!
//! Successive step intervals of a constant-acceleration ramp are
//! approximated by `d[n] = d[n-1] - 2 d[n-1] / (4n + 1)` while accelerating
//! and by the inverse relation while decelerating. One multiply and one
//! divide per step, no square roots.

/// Interval of the next step while accelerating.
///
/// `index` is the ramp step index after incrementing (>= 1).
#[inline]
pub fn accelerate(interval: f32, index: u32) -> f32 {
    let denominator = 4.0 * index as f32 + 1.0;
    interval - (2.0 * interval) / denominator
}

/// Interval of the next step while decelerating.
///
/// `index` is the ramp step index after decrementing. The index used in the
/// divisor is clamped to 1 so `4k + 1 - 2` can never reach zero.
#[inline]
pub fn decelerate(interval: f32, index: u32) -> f32 {
    let k = index.max(1) as f32;
    (interval * (4.0 * k + 1.0)) / (4.0 * k + 1.0 - 2.0)
}

/// Convert a fractional interval to a timer period.
#[inline]
pub fn to_period(interval: f32) -> u32 {
    (libm::roundf(interval) as u32).max(1)
}
