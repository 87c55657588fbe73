//! exp10(x) implementation.
//!
//! Computes 10^x as exp(x*ln10), reusing the hyperbolic rotation engine
//! behind exp.

use super::exp::{exp, expf};

#[inline]
pub fn exp10(x: f64) -> f64 {
    exp(x * core::f64::consts::LN_10)
}

#[inline]
pub fn exp10f(x: f32) -> f32 {
    expf(x * core::f32::consts::LN_10)
}
