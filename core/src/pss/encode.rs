//! pss/encode.rs
//! EMSA-PSS encoding.
//!
//! Layout of the encoded message (EM), `ceil(output_bits / 8)` bytes:
//!
//! ```text
//! [ 0x00 .. 0x00 ][ 0x01 ][ salt ]  <- DB, masked with MGF1(H)
//! [ H ]                             <- Hash(0x00 * 8 || digest || salt)
//! [ 0xBC ]                          <- trailer
//! ```
//!
//! The top `8 * len(EM) - output_bits` bits of EM[0] are cleared after masking.

use log::debug;

use crate::buffer::BufferStuffer;
use crate::constants::{MAX_KEY_BITS, PSS_TRAILER, SALT_MARKER, ZERO_PREFIX_LEN};
use crate::crypto::hash::HashFunction;
use crate::pss::mgf1::mgf1_mask;
use crate::types::PssError;
use crate::utils::{ceil_tobytes, min_output_bits};

/// Encode `digest` with `salt` into an `output_bits`-bit PSS block.
///
/// # Errors
/// - `InvalidInputLength` if `digest` is not exactly one hash output long.
/// - `OutputTooSmall` if `output_bits < 8 * hash_len + 8 * salt_len + 9`.
/// - `OutputTooLarge` if `output_bits > MAX_KEY_BITS`.
///
/// `hash` is used as scratch and left reset.
pub fn pss_encode<H: HashFunction + ?Sized>(
    hash: &mut H,
    digest: &[u8],
    salt: &[u8],
    output_bits: usize,
) -> Result<Vec<u8>, PssError> {
    let hash_len = hash.output_length();

    if digest.len() != hash_len {
        return Err(PssError::InvalidInputLength { expected: hash_len, actual: digest.len() });
    }

    let required_bits = min_output_bits(hash_len, salt.len());
    if output_bits < required_bits {
        return Err(PssError::OutputTooSmall { output_bits, required_bits });
    }

    if output_bits > MAX_KEY_BITS {
        return Err(PssError::OutputTooLarge { output_bits, max_bits: MAX_KEY_BITS });
    }

    let output_length = ceil_tobytes(output_bits);
    let db0_mask = 0xFFu8 >> ((8 - output_bits % 8) % 8);

    hash.update(&[0u8; ZERO_PREFIX_LEN]);
    hash.update(digest);
    hash.update(salt);
    let h = hash.finalize();

    let mut em = vec![0u8; output_length];
    let mut stuffer = BufferStuffer::new(&mut em);

    // DB = zero padding || 0x01 || salt, sized so H and the trailer fill the rest
    stuffer.append_repeated(0x00, stuffer.remaining_capacity() - (1 + salt.len() + h.len() + 1));
    stuffer.append_byte(SALT_MARKER);
    stuffer.append(salt);

    let db = stuffer.written_mut();
    mgf1_mask(hash, &h, db);
    db[0] &= db0_mask;

    stuffer.append(&h);
    stuffer.append_byte(PSS_TRAILER);
    stuffer.finish();

    debug!(
        "pss: encoded {} bytes ({} bits), hash={} salt_len={}",
        output_length,
        output_bits,
        hash.name(),
        salt.len()
    );

    Ok(em)
}
