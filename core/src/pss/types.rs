//! pss/types.rs
//! Salt policy and the padding interface a signature-scheme dispatcher consumes.

use rand_core::CryptoRngCore;

use crate::telemetry::PaddingCounters;
use crate::types::PssError;

/// Which recovered salt lengths verification accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SaltPolicy {
    /// Any salt length that fits; the configured length only drives signing.
    AnyLength,
    /// Recovered salt must be exactly the configured length.
    Exact,
}

/// Signature padding (EMSA) interface.
///
/// Call sequence when signing: `update`* → `raw_data` → `encoding_of`.
/// When verifying: `update`* → `raw_data` → `verify`.
pub trait SignaturePadding {
    /// Feed message bytes (or, for the raw variant, pre-hashed digest bytes).
    fn update(&mut self, input: &[u8]);

    /// Finish accumulation and return the digest; resets the accumulator.
    fn raw_data(&mut self) -> Result<Vec<u8>, PssError>;

    /// Encode `msg` (a digest from `raw_data`) into an `output_bits`-bit block
    /// with a fresh salt drawn from `rng`. Leaves any pending accumulation
    /// untouched.
    fn encoding_of(
        &mut self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>, PssError>;

    /// `true` iff `coded` is a valid encoding of `raw` for a `key_bits`-bit key
    /// under this padding's salt policy. Leaves any pending accumulation
    /// untouched.
    fn verify(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool;

    /// Name of the underlying hash.
    fn hash_function(&self) -> String;

    /// Canonical name, e.g. `PSS(SHA-256,MGF1,32)`.
    fn name(&self) -> String;

    fn counters(&self) -> &PaddingCounters;
}
