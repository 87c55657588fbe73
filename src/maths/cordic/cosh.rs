//! cosh(x) implementation.
//!
//! (e^x + e^-x)/2 over the CORDIC exp, mirroring sinh.rs.

use super::exp::{exp, expf, EXP_HI, EXP_HI_F32};
use super::{abs_f32, abs_f64};

const TINY_F64: f64 = 3.725_290_298_461_914e-9; // 2^-28
const TINY_F32: f32 = 2.441_406_25e-4; // 2^-12

#[inline]
pub fn cosh(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = abs_f64(x);
    if ax < TINY_F64 {
        return 1.0;
    }
    if ax >= EXP_HI {
        return f64::INFINITY;
    }
    let e = exp(ax);
    0.5 * (e + 1.0 / e)
}

#[inline]
pub fn coshf(x: f32) -> f32 {
    if x.is_nan() {
        return f32::NAN;
    }
    let ax = abs_f32(x);
    if ax < TINY_F32 {
        return 1.0;
    }
    if ax >= EXP_HI_F32 {
        return f32::INFINITY;
    }
    let e = expf(ax);
    0.5 * (e + 1.0 / e)
}
