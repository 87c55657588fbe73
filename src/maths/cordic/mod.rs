//! CORDIC-based transcendental functions.
//!
//! Every function here is computed by digit-by-digit shift-and-add rotation
//! instead of hardware trig instructions or a platform math library. The
//! iteration count is fixed to the mantissa width of each precision (24 for
//! f32, 53 for f64), so the inner loops execute identically on every input
//! and concurrently scheduled lockstep threads do not diverge. The only
//! data-dependent loops in the module are the 2pi range reduction in trig.rs
//! and the power-of-two reconstruction in exp.rs.

#![allow(clippy::excessive_precision)]

mod atan;
mod atan2;
mod cos;
mod cosh;
mod exp;
mod exp10;
mod exp2;
mod hyper;
mod log;
mod log10;
mod log2;
mod pow;
mod rotate;
mod sin;
mod sinh;
mod tables;
mod tan;
mod tanh;
mod trig;

pub use atan::{atan, atanf};
pub use atan2::{atan2, atan2f};
pub use cos::{cos, cosf};
pub use cosh::{cosh, coshf};
pub use exp::{exp, expf};
pub use exp10::{exp10, exp10f};
pub use exp2::{exp2, exp2f};
pub use hyper::{rotate_hyperbolic, rotate_hyperbolicf, vector_hyperbolic, vector_hyperbolicf};
pub use log::{ln, lnf};
pub use log10::{log10, log10f};
pub use log2::{log2, log2f};
pub use pow::{pow, powf};
pub use rotate::{rotate, rotatef, vector, vectorf};
pub use sin::{sin, sinf};
pub use sinh::{sinh, sinhf};
pub use tan::{tan, tanf};
pub use tanh::{tanh, tanhf};
pub use trig::{sincos, sincosf};

// ========= bit helpers =========

const SIGN_MASK_F64: u64 = 0x8000_0000_0000_0000u64;
const SIGN_MASK_F32: u32 = 0x8000_0000u32;

#[inline(always)]
fn abs_f64(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK_F64)
}

#[inline(always)]
fn abs_f32(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & !SIGN_MASK_F32)
}
