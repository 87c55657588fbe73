//! Shared trig range reduction and sin/cos/sincos/tan bodies.
//!
//! Reduction folds the argument into [-pi, pi] by whole turns and then into
//! [-pi/2, pi/2] with a quadrant flag recording the ±pi shift. sin, cos and
//! sincos negate through the flag; tan ignores it (period pi, the gain also
//! cancels in the quotient, so tan reads the raw kernel directly). The turn
//! loop is the one place in the circular path whose trip count depends on
//! the input magnitude.

use super::rotate::{rotate, rotate_raw, rotate_rawf, rotatef};
use super::{abs_f32, abs_f64};

const TINY_F64: f64 = 7.450_580_596_923_828e-9; // 2^-27
const TINY_F32: f32 = 2.441_406_25e-4; // 2^-12

#[inline(always)]
fn reduce(radians: f64) -> (f64, bool) {
    use core::f64::consts::{FRAC_PI_2, PI, TAU};
    let mut r = radians;
    while r > PI {
        r -= TAU;
    }
    while r < -PI {
        r += TAU;
    }
    if r > FRAC_PI_2 {
        (r - PI, true)
    } else if r < -FRAC_PI_2 {
        (r + PI, true)
    } else {
        (r, false)
    }
}

#[inline(always)]
fn reducef(radians: f32) -> (f32, bool) {
    use core::f32::consts::{FRAC_PI_2, PI, TAU};
    let mut r = radians;
    while r > PI {
        r -= TAU;
    }
    while r < -PI {
        r += TAU;
    }
    if r > FRAC_PI_2 {
        (r - PI, true)
    } else if r < -FRAC_PI_2 {
        (r + PI, true)
    } else {
        (r, false)
    }
}

#[inline(always)]
pub(crate) fn sin(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let (r, flip) = reduce(x);
    if abs_f64(r) < TINY_F64 {
        return if flip { -r } else { r };
    }
    let (_, s) = rotate(r);
    if flip {
        -s
    } else {
        s
    }
}

#[inline(always)]
pub(crate) fn sinf(x: f32) -> f32 {
    if !x.is_finite() {
        return f32::NAN;
    }
    let (r, flip) = reducef(x);
    if abs_f32(r) < TINY_F32 {
        return if flip { -r } else { r };
    }
    let (_, s) = rotatef(r);
    if flip {
        -s
    } else {
        s
    }
}

#[inline(always)]
pub(crate) fn cos(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let (r, flip) = reduce(x);
    if abs_f64(r) < TINY_F64 {
        return if flip { -1.0 } else { 1.0 };
    }
    let (c, _) = rotate(r);
    if flip {
        -c
    } else {
        c
    }
}

#[inline(always)]
pub(crate) fn cosf(x: f32) -> f32 {
    if !x.is_finite() {
        return f32::NAN;
    }
    let (r, flip) = reducef(x);
    if abs_f32(r) < TINY_F32 {
        return if flip { -1.0 } else { 1.0 };
    }
    let (c, _) = rotatef(r);
    if flip {
        -c
    } else {
        c
    }
}

/// Computes sin and cos of `x` from a single rotation pass.
#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    if !x.is_finite() {
        return (f64::NAN, f64::NAN);
    }
    let (r, flip) = reduce(x);
    if abs_f64(r) < TINY_F64 {
        return if flip { (-r, -1.0) } else { (r, 1.0) };
    }
    let (c, s) = rotate(r);
    if flip {
        (-s, -c)
    } else {
        (s, c)
    }
}

#[inline]
pub fn sincosf(x: f32) -> (f32, f32) {
    if !x.is_finite() {
        return (f32::NAN, f32::NAN);
    }
    let (r, flip) = reducef(x);
    if abs_f32(r) < TINY_F32 {
        return if flip { (-r, -1.0) } else { (r, 1.0) };
    }
    let (c, s) = rotatef(r);
    if flip {
        (-s, -c)
    } else {
        (s, c)
    }
}

#[inline(always)]
pub(crate) fn tan(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let (r, _) = reduce(x);
    if abs_f64(r) < TINY_F64 {
        return r;
    }
    let (c, s) = rotate_raw(r);
    s / c
}

#[inline(always)]
pub(crate) fn tanf(x: f32) -> f32 {
    if !x.is_finite() {
        return f32::NAN;
    }
    let (r, _) = reducef(x);
    if abs_f32(r) < TINY_F32 {
        return r;
    }
    let (c, s) = rotate_rawf(r);
    s / c
}
