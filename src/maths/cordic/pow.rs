//! pow(base, exponent) implementation.
//!
//! Composes the two hyperbolic-engine functions: x^y = exp(y*ln(x)).
//! Negative bases are legal only for integral exponents and route through
//! |x| with a sign fix-up on odd exponents.

use super::exp::{exp, expf};
use super::log::{ln, lnf};
use super::{abs_f32, abs_f64};

const TWO_POW_53: f64 = 9_007_199_254_740_992.0;
const TWO_POW_24: f32 = 16_777_216.0;

// Values at or above 2^mantissa are all integral (and even); infinities
// count as even integers for the sign rule, matching IEEE pow.
#[inline(always)]
fn is_integral(y: f64) -> bool {
    if !y.is_finite() || abs_f64(y) >= TWO_POW_53 {
        return true;
    }
    y == (y as i64) as f64
}

#[inline(always)]
fn is_odd_integer(y: f64) -> bool {
    if !y.is_finite() || abs_f64(y) >= TWO_POW_53 {
        return false;
    }
    y == (y as i64) as f64 && (y as i64) & 1 == 1
}

#[inline(always)]
fn is_integralf(y: f32) -> bool {
    if !y.is_finite() || abs_f32(y) >= TWO_POW_24 {
        return true;
    }
    y == (y as i32) as f32
}

#[inline(always)]
fn is_odd_integerf(y: f32) -> bool {
    if !y.is_finite() || abs_f32(y) >= TWO_POW_24 {
        return false;
    }
    y == (y as i32) as f32 && (y as i32) & 1 == 1
}

#[inline]
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 || base == 1.0 {
        return 1.0;
    }
    if base.is_nan() || exponent.is_nan() {
        return f64::NAN;
    }
    if base == 0.0 {
        return if exponent > 0.0 { 0.0 } else { f64::INFINITY };
    }
    if base < 0.0 {
        if !is_integral(exponent) {
            return f64::NAN;
        }
        let magnitude = exp(exponent * ln(-base));
        return if is_odd_integer(exponent) {
            -magnitude
        } else {
            magnitude
        };
    }
    exp(exponent * ln(base))
}

#[inline]
pub fn powf(base: f32, exponent: f32) -> f32 {
    if exponent == 0.0 || base == 1.0 {
        return 1.0;
    }
    if base.is_nan() || exponent.is_nan() {
        return f32::NAN;
    }
    if base == 0.0 {
        return if exponent > 0.0 { 0.0 } else { f32::INFINITY };
    }
    if base < 0.0 {
        if !is_integralf(exponent) {
            return f32::NAN;
        }
        let magnitude = expf(exponent * lnf(-base));
        return if is_odd_integerf(exponent) {
            -magnitude
        } else {
            magnitude
        };
    }
    expf(exponent * lnf(base))
}
