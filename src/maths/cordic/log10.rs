//! log10(x) implementation.
//!
//! Scales the hyperbolic-vectoring natural log by log10(e); ln's sentinel
//! ladder passes through the multiply intact.

use super::log::{ln, lnf};

#[inline]
pub fn log10(x: f64) -> f64 {
    ln(x) * core::f64::consts::LOG10_E
}

#[inline]
pub fn log10f(x: f32) -> f32 {
    lnf(x) * core::f32::consts::LOG10_E
}
