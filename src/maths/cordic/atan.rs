//! atan(x) implementation.
//!
//! Circular vectoring: rotates (1, x) until the sin component reaches zero
//! and reads back the accumulated angle. Converges for any finite input
//! without range reduction; infinities short-circuit to ±pi/2 and tiny
//! inputs return themselves.

use super::rotate::{vector, vectorf};
use super::{abs_f32, abs_f64};

const TINY_F64: f64 = 7.450_580_596_923_828e-9; // 2^-27
const TINY_F32: f32 = 2.441_406_25e-4; // 2^-12

#[inline]
pub fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() {
        return if x > 0.0 {
            core::f64::consts::FRAC_PI_2
        } else {
            -core::f64::consts::FRAC_PI_2
        };
    }
    if abs_f64(x) < TINY_F64 {
        return x;
    }
    vector(x)
}

#[inline]
pub fn atanf(x: f32) -> f32 {
    if x.is_nan() {
        return f32::NAN;
    }
    if x.is_infinite() {
        return if x > 0.0 {
            core::f32::consts::FRAC_PI_2
        } else {
            -core::f32::consts::FRAC_PI_2
        };
    }
    if abs_f32(x) < TINY_F32 {
        return x;
    }
    vectorf(x)
}
