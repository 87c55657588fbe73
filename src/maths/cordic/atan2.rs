//! atan2(y, x) implementation.
//!
//! Infinite and zero operands resolve through an explicit boundary table
//! before any division or iteration; everything else composes atan(y/x)
//! with a ±pi correction for the left half-plane.

use super::atan::{atan, atanf};

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    if y.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if y.is_infinite() {
        if x.is_infinite() {
            return match (y > 0.0, x > 0.0) {
                (true, true) => FRAC_PI_4,
                (true, false) => 3.0 * FRAC_PI_4,
                (false, true) => -FRAC_PI_4,
                (false, false) => -3.0 * FRAC_PI_4,
            };
        }
        return if y > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }
    if x.is_infinite() {
        return match (x > 0.0, y.is_sign_negative()) {
            (true, false) => 0.0,
            (true, true) => -0.0,
            (false, false) => PI,
            (false, true) => -PI,
        };
    }
    if x == 0.0 {
        return if y > 0.0 {
            FRAC_PI_2
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        };
    }
    let angle = atan(y / x);
    if x < 0.0 {
        if y.is_sign_negative() {
            angle - PI
        } else {
            angle + PI
        }
    } else {
        angle
    }
}

#[inline]
pub fn atan2f(y: f32, x: f32) -> f32 {
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    if y.is_nan() || x.is_nan() {
        return f32::NAN;
    }
    if y.is_infinite() {
        if x.is_infinite() {
            return match (y > 0.0, x > 0.0) {
                (true, true) => FRAC_PI_4,
                (true, false) => 3.0 * FRAC_PI_4,
                (false, true) => -FRAC_PI_4,
                (false, false) => -3.0 * FRAC_PI_4,
            };
        }
        return if y > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
    }
    if x.is_infinite() {
        return match (x > 0.0, y.is_sign_negative()) {
            (true, false) => 0.0,
            (true, true) => -0.0,
            (false, false) => PI,
            (false, true) => -PI,
        };
    }
    if x == 0.0 {
        return if y > 0.0 {
            FRAC_PI_2
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            0.0
        };
    }
    let angle = atanf(y / x);
    if x < 0.0 {
        if y.is_sign_negative() {
            angle - PI
        } else {
            angle + PI
        }
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn quadrant_boundaries_are_exact() {
        assert_eq!(atan2(0.0, 1.0), 0.0);
        assert_eq!(atan2(1.0, 0.0), FRAC_PI_2);
        assert_eq!(atan2(0.0, -1.0), PI);
        assert_eq!(atan2(-1.0, 0.0), -FRAC_PI_2);
        assert_eq!(atan2(0.0, 0.0), 0.0);
    }

    #[test]
    fn infinite_operands_resolve_by_table() {
        assert_eq!(atan2(f64::INFINITY, f64::INFINITY), FRAC_PI_4);
        assert_eq!(atan2(f64::INFINITY, f64::NEG_INFINITY), 3.0 * FRAC_PI_4);
        assert_eq!(atan2(f64::NEG_INFINITY, f64::INFINITY), -FRAC_PI_4);
        assert_eq!(
            atan2(f64::NEG_INFINITY, f64::NEG_INFINITY),
            -3.0 * FRAC_PI_4
        );
        assert_eq!(atan2(f64::INFINITY, 7.0), FRAC_PI_2);
        assert_eq!(atan2(-3.0, f64::INFINITY), -0.0);
        assert_eq!(atan2(-3.0, f64::NEG_INFINITY), -PI);
        assert_eq!(atan2(3.0, f64::NEG_INFINITY), PI);
    }
}
