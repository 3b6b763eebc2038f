//! Scalar helpers

use std::f64::consts::PI;

pub const TWO_PI: f64 = PI * 2.0;
pub const TO_DEGREES: f64 = 180.0 / PI;
pub const TO_RADIANS: f64 = PI / 180.0;

/// Linear interpolation from `min` to `max` by `t`
#[inline]
pub fn lerp(t: f64, min: f64, max: f64) -> f64 {
    (max - min) * t + min
}

/// Remap `value` from `[s_min, s_max]` to `[d_min, d_max]` (no clamping)
#[inline]
pub fn map(value: f64, s_min: f64, s_max: f64, d_min: f64, d_max: f64) -> f64 {
    let t = (value - s_min) / (s_max - s_min);
    (d_max - d_min) * t + d_min
}

/// Truncated remainder by one full turn; the result keeps the sign of `angle`
#[inline]
pub fn wrap_turn(angle: f64) -> f64 {
    angle % TWO_PI
}
