//! utils.rs
//! Bit and length helpers used by the encoder and the verifier.

use crate::constants::MIN_OVERHEAD_BITS;

/// Number of bytes needed to hold `bits` bits.
///
/// Written without `bits + 7` so attacker-chosen sizes near `usize::MAX`
/// cannot overflow.
#[inline]
pub fn ceil_tobytes(bits: usize) -> usize {
    bits / 8 + usize::from(bits % 8 != 0)
}

/// Position of the highest set bit, counting from 1 (`0` for a zero byte).
#[inline]
pub fn high_bit(byte: u8) -> usize {
    (u8::BITS - byte.leading_zeros()) as usize
}

/// Smallest encoding size in bits for the given digest and salt lengths.
///
/// Saturates at `usize::MAX` for absurd salt lengths.
#[inline]
pub fn min_output_bits(hash_len: usize, salt_len: usize) -> usize {
    hash_len
        .saturating_add(salt_len)
        .saturating_mul(8)
        .saturating_add(MIN_OVERHEAD_BITS)
}
