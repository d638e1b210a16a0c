//! constants.rs
//! Fixed values of the EMSA-PSS layout and the digest registry ids.

/// Trailer byte closing every encoded message.
pub const PSS_TRAILER: u8 = 0xBC;

/// Separator between the zero padding and the salt inside the data block.
pub const SALT_MARKER: u8 = 0x01;

/// Length of the all-zero prefix hashed ahead of the digest and salt.
pub const ZERO_PREFIX_LEN: usize = 8;

/// Bits an encoding needs on top of `8 * (digest_len + salt_len)`.
pub const MIN_OVERHEAD_BITS: usize = 9;

/// Upper bound on `key_bits` accepted by verification.
///
/// Verification allocates `ceil(key_bits / 8)` bytes; the bound keeps that
/// allocation fixed even when `key_bits` arrives from an untrusted source.
pub const MAX_KEY_BITS: usize = 64 * 1024;

/// Digest registry identifiers (stable, used by `DigestAlg`).
pub mod digest_ids {
    pub const SHA256: u16   = 0x0001;
    pub const SHA384: u16   = 0x0002;
    pub const SHA512: u16   = 0x0003;
    pub const SHA3_256: u16 = 0x0101;
    pub const SHA3_512: u16 = 0x0102;
    pub const BLAKE3: u16   = 0x0201; // unkeyed BLAKE3, 32-byte output
}
