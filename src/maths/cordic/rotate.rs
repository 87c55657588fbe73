//! Circular CORDIC rotation and vectoring engines.
//!
//! Rotation mode turns a reduced angle into (cos, sin); vectoring mode turns
//! a tangent value into the angle it subtends. Both run a fixed M-iteration
//! shift-and-add loop over the atan(2^-i) table. The unnormalized rotation
//! matrices stretch the vector by a constant factor, corrected afterwards by
//! the INV_GAIN_* literals.

use super::tables::{ATAN_F32, ATAN_F64, INV_GAIN_F32, INV_GAIN_F64};

/// Rotation kernel without gain correction. `radians` must already be
/// reduced to [-pi/2, pi/2].
#[inline(always)]
pub(crate) fn rotate_raw(radians: f64) -> (f64, f64) {
    let mut cos = 1.0f64;
    let mut sin = 0.0f64;
    let mut z = radians;
    let mut pow2 = 1.0f64;
    for &angle in ATAN_F64.iter() {
        let sigma = if z >= 0.0 { 1.0 } else { -1.0 };
        let factor = sigma * pow2;
        (cos, sin) = (cos - sin * factor, sin + cos * factor);
        z -= sigma * angle;
        pow2 *= 0.5;
    }
    (cos, sin)
}

#[inline(always)]
pub(crate) fn rotate_rawf(radians: f32) -> (f32, f32) {
    let mut cos = 1.0f32;
    let mut sin = 0.0f32;
    let mut z = radians;
    let mut pow2 = 1.0f32;
    for &angle in ATAN_F32.iter() {
        let sigma = if z >= 0.0 { 1.0 } else { -1.0 };
        let factor = sigma * pow2;
        (cos, sin) = (cos - sin * factor, sin + cos * factor);
        z -= sigma * angle;
        pow2 *= 0.5;
    }
    (cos, sin)
}

/// Rotates the unit vector by `radians` (reduced to [-pi/2, pi/2]) and
/// returns gain-corrected (cos, sin).
#[inline]
pub fn rotate(radians: f64) -> (f64, f64) {
    let (cos, sin) = rotate_raw(radians);
    (cos * INV_GAIN_F64, sin * INV_GAIN_F64)
}

#[inline]
pub fn rotatef(radians: f32) -> (f32, f32) {
    let (cos, sin) = rotate_rawf(radians);
    (cos * INV_GAIN_F32, sin * INV_GAIN_F32)
}

/// Rotates (1, y) until the sin component reaches zero and returns the
/// accumulated angle, atan(y). Converges for any finite `y`; no range
/// reduction is required. The magnitude gain never enters the accumulator,
/// so no correction applies.
#[inline]
pub fn vector(y: f64) -> f64 {
    let mut cos = 1.0f64;
    let mut sin = y;
    let mut z = 0.0f64;
    let mut pow2 = 1.0f64;
    for &angle in ATAN_F64.iter() {
        let sigma = if sin >= 0.0 { -1.0 } else { 1.0 };
        let factor = sigma * pow2;
        (cos, sin) = (cos - sin * factor, sin + cos * factor);
        z -= sigma * angle;
        pow2 *= 0.5;
    }
    z
}

#[inline]
pub fn vectorf(y: f32) -> f32 {
    let mut cos = 1.0f32;
    let mut sin = y;
    let mut z = 0.0f32;
    let mut pow2 = 1.0f32;
    for &angle in ATAN_F32.iter() {
        let sigma = if sin >= 0.0 { -1.0 } else { 1.0 };
        let factor = sigma * pow2;
        (cos, sin) = (cos - sin * factor, sin + cos * factor);
        z -= sigma * angle;
        pow2 *= 0.5;
    }
    z
}
