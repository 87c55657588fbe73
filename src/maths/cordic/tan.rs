//! tan(x) implementation.
//!
//! Thin wrapper around the raw-kernel tangent in trig.rs. The circular gain
//! cancels in sin/cos, so tan never applies it, and the ±pi fold needs no
//! sign fix-up because tan has period pi.

#[inline(always)]
pub fn tan(x: f64) -> f64 {
    super::trig::tan(x)
}

#[inline(always)]
pub fn tanf(x: f32) -> f32 {
    super::trig::tanf(x)
}
