//! pss/wrapper.rs
//! Stateful PSS paddings: `Pssr` (hashes the message itself) and `PssRaw`
//! (takes a pre-hashed digest).
//!
//! Design notes:
//! - Each wrapper exclusively owns two hash instances of the same algorithm:
//!   the accumulator fed by `update`, and a scratch instance from `new_object`
//!   that encode/verify run on. Encoding or verifying never disturbs a
//!   pending accumulation.
//! - Not reentrant: all operations take `&mut self`. Share across threads only
//!   behind external synchronization.
//! - Salt length defaults to the hash output length with any recovered length
//!   accepted; an explicit salt length is also enforced on verification.

use std::mem;

use log::debug;
use rand_core::{CryptoRngCore, RngCore};

use crate::crypto::hash::HashFunction;
use crate::pss::encode::pss_encode;
use crate::pss::types::{SaltPolicy, SignaturePadding};
use crate::pss::verify::pss_verify;
use crate::telemetry::PaddingCounters;
use crate::types::PssError;

/// Exclusively owned, type-erased hash instance.
pub type BoxedHash = Box<dyn HashFunction + Send>;

/// State shared by both wrappers.
struct PssParams<H> {
    hash: H,
    scratch: BoxedHash,
    salt_len: usize,
    policy: SaltPolicy,
    counters: PaddingCounters,
}

impl<H: HashFunction> PssParams<H> {
    fn new(hash: H, salt_len: Option<usize>) -> Self {
        let (salt_len, policy) = match salt_len {
            Some(len) => (len, SaltPolicy::Exact),
            None => (hash.output_length(), SaltPolicy::AnyLength),
        };
        let scratch = hash.new_object();
        Self { hash, scratch, salt_len, policy, counters: PaddingCounters::default() }
    }

    fn encoding_of(
        &mut self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>, PssError> {
        let mut salt = vec![0u8; self.salt_len];
        rng.fill_bytes(&mut salt);

        let em = pss_encode(&mut self.scratch, msg, &salt, output_bits)?;
        self.counters.record_encoding(em.len());
        Ok(em)
    }

    fn verify_salt_len(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> Option<usize> {
        let recovered = pss_verify(&mut self.scratch, coded, raw, key_bits);

        let accepted = match (recovered, self.policy) {
            (Some(len), SaltPolicy::Exact) if len != self.salt_len => None,
            (other, _) => other,
        };

        self.counters.record_verification(accepted.is_some());
        accepted
    }

    fn describe(&self, scheme: &str) -> String {
        format!("{}({},MGF1,{})", scheme, self.hash.name(), self.salt_len)
    }
}

/// PSS over an accumulated message: `update` feeds the hash, `raw_data`
/// returns its digest.
pub struct Pssr<H = BoxedHash> {
    params: PssParams<H>,
}

impl<H: HashFunction> Pssr<H> {
    /// Salt length = hash output length; verification accepts any salt length.
    pub fn new(hash: H) -> Self {
        let pssr = Self { params: PssParams::new(hash, None) };
        debug!("pss: created {} policy={:?}", pssr.name(), pssr.params.policy);
        pssr
    }

    /// Fixed salt length, also required on verification.
    pub fn with_salt_len(hash: H, salt_len: usize) -> Self {
        let pssr = Self { params: PssParams::new(hash, Some(salt_len)) };
        debug!("pss: created {} policy={:?}", pssr.name(), pssr.params.policy);
        pssr
    }

    pub fn salt_len(&self) -> usize {
        self.params.salt_len
    }

    pub fn salt_policy(&self) -> SaltPolicy {
        self.params.policy
    }

    /// Like `verify`, but returns the recovered salt length on success.
    pub fn verify_salt_len(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> Option<usize> {
        self.params.verify_salt_len(coded, raw, key_bits)
    }
}

impl<H: HashFunction> SignaturePadding for Pssr<H> {
    fn update(&mut self, input: &[u8]) {
        self.params.hash.update(input);
        self.params.counters.add_absorbed(input.len());
    }

    fn raw_data(&mut self) -> Result<Vec<u8>, PssError> {
        Ok(self.params.hash.finalize())
    }

    fn encoding_of(
        &mut self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>, PssError> {
        self.params.encoding_of(msg, output_bits, rng)
    }

    fn verify(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool {
        self.params.verify_salt_len(coded, raw, key_bits).is_some()
    }

    fn hash_function(&self) -> String {
        self.params.hash.name()
    }

    fn name(&self) -> String {
        self.params.describe("PSS")
    }

    fn counters(&self) -> &PaddingCounters {
        &self.params.counters
    }
}

/// PSS over a digest computed elsewhere: `update` buffers bytes, `raw_data`
/// hands them back and insists they are exactly one hash output long.
pub struct PssRaw<H = BoxedHash> {
    params: PssParams<H>,
    msg: Vec<u8>,
}

impl<H: HashFunction> PssRaw<H> {
    /// Salt length = hash output length; verification accepts any salt length.
    pub fn new(hash: H) -> Self {
        let raw = Self { params: PssParams::new(hash, None), msg: Vec::new() };
        debug!("pss: created {} policy={:?}", raw.name(), raw.params.policy);
        raw
    }

    /// Fixed salt length, also required on verification.
    pub fn with_salt_len(hash: H, salt_len: usize) -> Self {
        let raw = Self { params: PssParams::new(hash, Some(salt_len)), msg: Vec::new() };
        debug!("pss: created {} policy={:?}", raw.name(), raw.params.policy);
        raw
    }

    pub fn salt_len(&self) -> usize {
        self.params.salt_len
    }

    pub fn salt_policy(&self) -> SaltPolicy {
        self.params.policy
    }

    /// Like `verify`, but returns the recovered salt length on success.
    pub fn verify_salt_len(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> Option<usize> {
        self.params.verify_salt_len(coded, raw, key_bits)
    }
}

impl<H: HashFunction> SignaturePadding for PssRaw<H> {
    fn update(&mut self, input: &[u8]) {
        self.msg.extend_from_slice(input);
        self.params.counters.add_absorbed(input.len());
    }

    /// Drains the buffer even when the length check fails.
    fn raw_data(&mut self) -> Result<Vec<u8>, PssError> {
        let ret = mem::take(&mut self.msg);
        let expected = self.params.hash.output_length();

        if ret.len() != expected {
            return Err(PssError::RawLengthMismatch { expected, actual: ret.len() });
        }

        Ok(ret)
    }

    fn encoding_of(
        &mut self,
        msg: &[u8],
        output_bits: usize,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>, PssError> {
        self.params.encoding_of(msg, output_bits, rng)
    }

    fn verify(&mut self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool {
        self.params.verify_salt_len(coded, raw, key_bits).is_some()
    }

    fn hash_function(&self) -> String {
        self.params.hash.name()
    }

    fn name(&self) -> String {
        self.params.describe("PSS_Raw")
    }

    fn counters(&self) -> &PaddingCounters {
        &self.params.counters
    }
}
