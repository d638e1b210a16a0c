//! pss/mgf1.rs
//! MGF1 mask generation.
//!
//! Design:
//! - mask = H(seed || 0x00000000) || H(seed || 0x00000001) || ... truncated to
//!   the target length; the counter is a 32-bit big-endian integer.
//! - Applied by XOR in place, so the same call masks and unmasks.

use crate::crypto::hash::HashFunction;

/// XOR `out` with the MGF1 mask derived from `seed`.
///
/// Leaves `hash` reset. Panics if the hash reports a zero output length.
pub fn mgf1_mask<H: HashFunction + ?Sized>(hash: &mut H, seed: &[u8], out: &mut [u8]) {
    let block_len = hash.output_length();
    assert!(block_len > 0, "MGF1 requires a hash with non-zero output length");

    for (counter, chunk) in out.chunks_mut(block_len).enumerate() {
        hash.update(seed);
        hash.update(&(counter as u32).to_be_bytes());
        let block = hash.finalize();

        for (dst, m) in chunk.iter_mut().zip(block.iter()) {
            *dst ^= *m;
        }
    }
}

/// The raw MGF1 output of `len` bytes.
pub fn mgf1<H: HashFunction + ?Sized>(hash: &mut H, seed: &[u8], len: usize) -> Vec<u8> {
    let mut mask = vec![0u8; len];
    mgf1_mask(hash, seed, &mut mask);
    mask
}
