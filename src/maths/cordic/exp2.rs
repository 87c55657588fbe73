//! exp2(x) implementation.
//!
//! Computes 2^x as exp(x*ln2), reusing the hyperbolic rotation engine
//! behind exp.

use super::exp::{exp, expf};

#[inline]
pub fn exp2(x: f64) -> f64 {
    exp(x * core::f64::consts::LN_2)
}

#[inline]
pub fn exp2f(x: f32) -> f32 {
    expf(x * core::f32::consts::LN_2)
}
