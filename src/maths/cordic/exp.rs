//! exp(x) implementation.
//!
//! Decomposes non-negative x into quotient*ln2 + remainder, runs the
//! hyperbolic rotation engine on the remainder (cosh r + sinh r = e^r) and
//! reconstructs 2^quotient by repeated doubling, the second data-dependent
//! loop in the module (bounded by the EXP_HI cutoff). Negative inputs
//! reflect through exp(x) = 1/exp(-x).

use super::hyper::{inv_gain, inv_gainf, rotate_hyperbolic_raw, rotate_hyperbolic_rawf};

pub(crate) const EXP_HI: f64 = 709.782_712_893_384;
pub(crate) const EXP_HI_F32: f32 = 88.722_83;

#[inline]
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() {
        return if x > 0.0 { f64::INFINITY } else { 0.0 };
    }
    if x < 0.0 {
        return 1.0 / exp(-x);
    }
    if x > EXP_HI {
        return f64::INFINITY;
    }

    // EXP_HI sits exactly on 1024*ln2; cap the quotient so 2^q stays finite
    // and the boundary remainder (at most ~ln2) still converges
    let mut quotient = (x / core::f64::consts::LN_2) as i32;
    if quotient > 1023 {
        quotient = 1023;
    }
    let remainder = x - (quotient as f64) * core::f64::consts::LN_2;

    let (cosh, sinh) = rotate_hyperbolic_raw(remainder);

    let mut pow2 = 1.0f64;
    let mut doublings = quotient;
    while doublings > 0 {
        pow2 *= 2.0;
        doublings -= 1;
    }

    pow2 * (cosh + sinh) * inv_gain()
}

#[inline]
pub fn expf(x: f32) -> f32 {
    if x.is_nan() {
        return f32::NAN;
    }
    if x.is_infinite() {
        return if x > 0.0 { f32::INFINITY } else { 0.0 };
    }
    if x < 0.0 {
        return 1.0 / expf(-x);
    }
    if x > EXP_HI_F32 {
        return f32::INFINITY;
    }

    let mut quotient = (x / core::f32::consts::LN_2) as i32;
    if quotient > 127 {
        quotient = 127;
    }
    let remainder = x - (quotient as f32) * core::f32::consts::LN_2;

    let (cosh, sinh) = rotate_hyperbolic_rawf(remainder);

    let mut pow2 = 1.0f32;
    let mut doublings = quotient;
    while doublings > 0 {
        pow2 *= 2.0;
        doublings -= 1;
    }

    pow2 * (cosh + sinh) * inv_gainf()
}
