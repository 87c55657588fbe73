//! log2(x) implementation.
//!
//! Scales the hyperbolic-vectoring natural log by log2(e); ln's sentinel
//! ladder (NaN, ±0, negative, infinity) passes through the multiply intact.

use super::log::{ln, lnf};

#[inline]
pub fn log2(x: f64) -> f64 {
    ln(x) * core::f64::consts::LOG2_E
}

#[inline]
pub fn log2f(x: f32) -> f32 {
    lnf(x) * core::f32::consts::LOG2_E
}
