//! Hyperbolic CORDIC rotation and vectoring engines.
//!
//! Mirrors the circular engines with the additive matrix [[1, s*2^-i],
//! [s*2^-i, 1]] and the atanh(2^-i) row tables, which bake in the repeated
//! convergence steps (see tables.rs). The cumulative gain of the truncated,
//! repeat-augmented schedule has no closed form; it is self-calibrated once
//! per process by rotating the known-answer input 0 (cosh(0) = 1) and
//! caching the reciprocal of the raw output.

use core::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use super::tables::{ATANH_F32, ATANH_F64};

#[inline(always)]
pub(crate) fn rotate_hyperbolic_raw(x: f64) -> (f64, f64) {
    let mut cosh = 1.0f64;
    let mut sinh = 0.0f64;
    let mut z = x;
    for &(pow2, angle) in ATANH_F64.iter() {
        let sigma = if z >= 0.0 { 1.0 } else { -1.0 };
        let factor = sigma * pow2;
        (cosh, sinh) = (cosh + sinh * factor, sinh + cosh * factor);
        z -= sigma * angle;
    }
    (cosh, sinh)
}

#[inline(always)]
pub(crate) fn rotate_hyperbolic_rawf(x: f32) -> (f32, f32) {
    let mut cosh = 1.0f32;
    let mut sinh = 0.0f32;
    let mut z = x;
    for &(pow2, angle) in ATANH_F32.iter() {
        let sigma = if z >= 0.0 { 1.0 } else { -1.0 };
        let factor = sigma * pow2;
        (cosh, sinh) = (cosh + sinh * factor, sinh + cosh * factor);
        z -= sigma * angle;
    }
    (cosh, sinh)
}

// Cached gain reciprocals, stored as raw bits. 0 marks "not yet computed"
// and can never alias a real gain value. The store is relaxed: a racing
// recomputation produces bit-identical results, so redundant work is the
// worst case and no lock is needed.
static INV_GAIN_BITS_F64: AtomicU64 = AtomicU64::new(0);
static INV_GAIN_BITS_F32: AtomicU32 = AtomicU32::new(0);

#[inline(always)]
pub(crate) fn calibrate() -> f64 {
    let (cosh0, _) = rotate_hyperbolic_raw(0.0);
    1.0 / cosh0
}

#[inline(always)]
pub(crate) fn calibratef() -> f32 {
    let (cosh0, _) = rotate_hyperbolic_rawf(0.0);
    1.0 / cosh0
}

#[inline]
pub(crate) fn inv_gain() -> f64 {
    let bits = INV_GAIN_BITS_F64.load(Ordering::Relaxed);
    if bits != 0 {
        return f64::from_bits(bits);
    }
    let inv = calibrate();
    INV_GAIN_BITS_F64.store(inv.to_bits(), Ordering::Relaxed);
    inv
}

#[inline]
pub(crate) fn inv_gainf() -> f32 {
    let bits = INV_GAIN_BITS_F32.load(Ordering::Relaxed);
    if bits != 0 {
        return f32::from_bits(bits);
    }
    let inv = calibratef();
    INV_GAIN_BITS_F32.store(inv.to_bits(), Ordering::Relaxed);
    inv
}

/// Rotates (1, 0) by the hyperbolic angle `x` and returns gain-corrected
/// (cosh, sinh). |x| must stay within the schedule's convergence bound,
/// roughly 1.118.
#[inline]
pub fn rotate_hyperbolic(x: f64) -> (f64, f64) {
    let inv = inv_gain();
    let (cosh, sinh) = rotate_hyperbolic_raw(x);
    (cosh * inv, sinh * inv)
}

#[inline]
pub fn rotate_hyperbolicf(x: f32) -> (f32, f32) {
    let inv = inv_gainf();
    let (cosh, sinh) = rotate_hyperbolic_rawf(x);
    (cosh * inv, sinh * inv)
}

/// Drives the sinh component of (cosh, sinh) to zero and returns the
/// hyperbolic angle traversed, atanh(sinh/cosh). The magnitude gain never
/// enters the accumulator, so no correction applies.
#[inline]
pub fn vector_hyperbolic(cosh: f64, sinh: f64) -> f64 {
    let mut cosh = cosh;
    let mut sinh = sinh;
    let mut z = 0.0f64;
    for &(pow2, angle) in ATANH_F64.iter() {
        let sigma = if sinh < 0.0 { 1.0 } else { -1.0 };
        let factor = sigma * pow2;
        (cosh, sinh) = (cosh + sinh * factor, sinh + cosh * factor);
        z -= sigma * angle;
    }
    z
}

#[inline]
pub fn vector_hyperbolicf(cosh: f32, sinh: f32) -> f32 {
    let mut cosh = cosh;
    let mut sinh = sinh;
    let mut z = 0.0f32;
    for &(pow2, angle) in ATANH_F32.iter() {
        let sigma = if sinh < 0.0 { 1.0 } else { -1.0 };
        let factor = sigma * pow2;
        (cosh, sinh) = (cosh + sinh * factor, sinh + cosh * factor);
        z -= sigma * angle;
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::vec::Vec;

    #[test]
    fn calibration_is_idempotent() {
        assert_eq!(calibrate().to_bits(), calibrate().to_bits());
        assert_eq!(calibratef().to_bits(), calibratef().to_bits());
    }

    #[test]
    fn racing_gain_reads_agree_bitwise() {
        let handles: Vec<_> = (0..4)
            .map(|_| thread::spawn(|| (inv_gain().to_bits(), inv_gainf().to_bits())))
            .collect();
        let first = (inv_gain().to_bits(), inv_gainf().to_bits());
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first);
        }
    }

    #[test]
    fn rotate_hyperbolic_matches_std() {
        for i in -11..=11 {
            let x = (i as f64) * 0.1;
            let (c, s) = rotate_hyperbolic(x);
            assert!((c - x.cosh()).abs() < 1e-14, "cosh({x}): {c}");
            assert!((s - x.sinh()).abs() < 1e-14, "sinh({x}): {s}");
        }
    }

    #[test]
    fn vector_hyperbolic_recovers_atanh() {
        for i in 1..=9 {
            let t = (i as f64) * 0.05;
            let z = vector_hyperbolic(1.0, t);
            assert!((z - t.atanh()).abs() < 1e-14, "atanh({t}): {z}");
        }
    }
}
