//! sin(x) implementation.
//!
//! Thin wrapper around the shared range reducer and circular rotation
//! engine in trig.rs.

#[inline(always)]
pub fn sin(x: f64) -> f64 {
    super::trig::sin(x)
}

#[inline(always)]
pub fn sinf(x: f32) -> f32 {
    super::trig::sinf(x)
}
