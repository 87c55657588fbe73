//! sinh(x) implementation.
//!
//! (e^x - e^-x)/2 over the CORDIC exp. The direct hyperbolic rotation only
//! covers |x| below its convergence bound, so the exponential identity
//! serves the full range. Tiny inputs return themselves.

use super::exp::{exp, expf, EXP_HI, EXP_HI_F32};
use super::{abs_f32, abs_f64};

const TINY_F64: f64 = 3.725_290_298_461_914e-9; // 2^-28
const TINY_F32: f32 = 2.441_406_25e-4; // 2^-12

#[inline]
pub fn sinh(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = abs_f64(x);
    if ax < TINY_F64 {
        return x;
    }
    if ax >= EXP_HI {
        return if x.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let e = exp(ax);
    let s = 0.5 * (e - 1.0 / e);
    if x.is_sign_negative() {
        -s
    } else {
        s
    }
}

#[inline]
pub fn sinhf(x: f32) -> f32 {
    if x.is_nan() {
        return f32::NAN;
    }
    let ax = abs_f32(x);
    if ax < TINY_F32 {
        return x;
    }
    if ax >= EXP_HI_F32 {
        return if x.is_sign_negative() {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };
    }
    let e = expf(ax);
    let s = 0.5 * (e - 1.0 / e);
    if x.is_sign_negative() {
        -s
    } else {
        s
    }
}
