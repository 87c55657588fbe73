//! cos(x) implementation.
//!
//! Thin wrapper around the shared range reducer and circular rotation
//! engine in trig.rs.

#[inline(always)]
pub fn cos(x: f64) -> f64 {
    super::trig::cos(x)
}

#[inline(always)]
pub fn cosf(x: f32) -> f32 {
    super::trig::cosf(x)
}
