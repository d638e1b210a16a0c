//! crypto/ct.rs
//! Constant-time helpers for code paths that touch untrusted signature material.
//!
//! Security notes:
//! - `is_equal` never exits at the first differing byte; the only early result
//!   is a length mismatch, and lengths are public.
//! - Never combine results from here with `&&` / `||` before converting; stay
//!   in `subtle::Choice` until the final decision.

use subtle::{Choice, ConstantTimeEq};

/// Fixed-time equality over two byte strings.
#[inline]
pub fn is_equal(a: &[u8], b: &[u8]) -> bool {
    ct_eq(a, b).into()
}

/// Fixed-time equality returning the raw `Choice`.
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> Choice {
    a.ct_eq(b)
}
