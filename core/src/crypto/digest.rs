//! crypto/digest.rs
//! Concrete `HashFunction` adapters and the digest registry.
//!
//! Design notes:
//! - SHA-2 and SHA-3 come from RustCrypto (`digest` 0.10 traits), BLAKE3 from
//!   the `blake3` crate. All adapters reset on `finalize`.
//! - `DigestAlg` is the stable registry used by configuration: numeric id for
//!   compact storage, canonical name for display and serde. Deserialization
//!   goes through `FromStr`, so config files accept the same spellings.

use std::fmt;
use std::str::FromStr;

use digest::{Digest, FixedOutputReset};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::digest_ids;
use crate::crypto::hash::HashFunction;
use crate::types::PssError;

/// Adapter over any RustCrypto fixed-output digest.
#[derive(Clone)]
pub struct RustCryptoHash<D> {
    inner: D,
    name: &'static str,
}

impl<D: Digest + FixedOutputReset + Default> RustCryptoHash<D> {
    pub fn new(name: &'static str) -> Self {
        Self { inner: D::default(), name }
    }
}

impl<D: Digest + FixedOutputReset + Default + Send + 'static> HashFunction for RustCryptoHash<D> {
    fn name(&self) -> String {
        self.name.to_string()
    }

    #[inline]
    fn output_length(&self) -> usize {
        <D as Digest>::output_size()
    }

    #[inline]
    fn update(&mut self, input: &[u8]) {
        Digest::update(&mut self.inner, input);
    }

    #[inline]
    fn finalize(&mut self) -> Vec<u8> {
        Digest::finalize_reset(&mut self.inner).to_vec()
    }

    fn new_object(&self) -> Box<dyn HashFunction + Send> {
        Box::new(Self::new(self.name))
    }

    fn clear(&mut self) {
        Digest::reset(&mut self.inner);
    }
}

pub type Sha256Hash = RustCryptoHash<sha2::Sha256>;
pub type Sha384Hash = RustCryptoHash<sha2::Sha384>;
pub type Sha512Hash = RustCryptoHash<sha2::Sha512>;
pub type Sha3_256Hash = RustCryptoHash<sha3::Sha3_256>;
pub type Sha3_512Hash = RustCryptoHash<sha3::Sha3_512>;

/// Unkeyed BLAKE3 with the default 32-byte output.
#[derive(Clone, Default)]
pub struct Blake3Hash {
    inner: blake3::Hasher,
}

impl Blake3Hash {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HashFunction for Blake3Hash {
    fn name(&self) -> String {
        DigestAlg::Blake3.name().to_string()
    }

    #[inline]
    fn output_length(&self) -> usize {
        blake3::OUT_LEN
    }

    #[inline]
    fn update(&mut self, input: &[u8]) {
        // update returns &mut Hasher for chaining; not needed here
        self.inner.update(input);
    }

    #[inline]
    fn finalize(&mut self) -> Vec<u8> {
        let out = self.inner.finalize();
        self.inner.reset();
        out.as_bytes().to_vec()
    }

    fn new_object(&self) -> Box<dyn HashFunction + Send> {
        Box::new(Blake3Hash::new())
    }

    fn clear(&mut self) {
        self.inner.reset();
    }
}

/// Supported digest algorithms (extensible).
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DigestAlg {
    Sha256 = digest_ids::SHA256,
    Sha384 = digest_ids::SHA384,
    Sha512 = digest_ids::SHA512,
    Sha3_256 = digest_ids::SHA3_256,
    Sha3_512 = digest_ids::SHA3_512,
    Blake3 = digest_ids::BLAKE3,
}

impl DigestAlg {
    pub const ALL: [DigestAlg; 6] = [
        DigestAlg::Sha256,
        DigestAlg::Sha384,
        DigestAlg::Sha512,
        DigestAlg::Sha3_256,
        DigestAlg::Sha3_512,
        DigestAlg::Blake3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DigestAlg::Sha256 => "SHA-256",
            DigestAlg::Sha384 => "SHA-384",
            DigestAlg::Sha512 => "SHA-512",
            DigestAlg::Sha3_256 => "SHA3-256",
            DigestAlg::Sha3_512 => "SHA3-512",
            DigestAlg::Blake3 => "BLAKE3",
        }
    }

    pub fn output_length(self) -> usize {
        match self {
            DigestAlg::Sha256 | DigestAlg::Sha3_256 | DigestAlg::Blake3 => 32,
            DigestAlg::Sha384 => 48,
            DigestAlg::Sha512 | DigestAlg::Sha3_512 => 64,
        }
    }

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Result<Self, PssError> {
        DigestAlg::try_from_primitive(id).map_err(|_| PssError::UnknownAlgorithmId(id))
    }

    /// Fresh, exclusively owned hash instance.
    pub fn instance(self) -> Box<dyn HashFunction + Send> {
        match self {
            DigestAlg::Sha256 => Box::new(Sha256Hash::new(self.name())),
            DigestAlg::Sha384 => Box::new(Sha384Hash::new(self.name())),
            DigestAlg::Sha512 => Box::new(Sha512Hash::new(self.name())),
            DigestAlg::Sha3_256 => Box::new(Sha3_256Hash::new(self.name())),
            DigestAlg::Sha3_512 => Box::new(Sha3_512Hash::new(self.name())),
            DigestAlg::Blake3 => Box::new(Blake3Hash::new()),
        }
    }
}

impl fmt::Display for DigestAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts canonical names case-insensitively, with or without the dash
/// (`SHA-256`, `sha256`, `Sha3-512`).
impl FromStr for DigestAlg {
    type Err = PssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "").to_ascii_uppercase();
        DigestAlg::ALL
            .into_iter()
            .find(|alg| alg.name().replace('-', "") == wanted)
            .ok_or_else(|| PssError::UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for DigestAlg {
    type Error = PssError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DigestAlg> for String {
    fn from(alg: DigestAlg) -> Self {
        alg.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_report_registry_lengths_and_names() {
        for alg in DigestAlg::ALL {
            let mut h = alg.instance();
            assert_eq!(h.output_length(), alg.output_length(), "{alg}");
            assert_eq!(h.name(), alg.name());
            h.update(b"abc");
            assert_eq!(h.finalize().len(), alg.output_length());
        }
    }

    #[test]
    fn finalize_resets_state() {
        for alg in DigestAlg::ALL {
            let mut h = alg.instance();
            h.update(b"first");
            let first = h.finalize();
            h.update(b"first");
            assert_eq!(h.finalize(), first, "{alg}");
        }
    }

    #[test]
    fn clear_discards_pending_input() {
        let mut a = DigestAlg::Sha256.instance();
        let mut b = DigestAlg::Sha256.instance();
        a.update(b"junk");
        a.clear();
        a.update(b"msg");
        b.update(b"msg");
        assert_eq!(a.finalize(), b.finalize());
    }

    #[test]
    fn ids_round_trip_and_unknown_rejected() {
        for alg in DigestAlg::ALL {
            assert_eq!(DigestAlg::from_id(alg.id()).unwrap(), alg);
        }
        assert_eq!(
            DigestAlg::from_id(0x7777),
            Err(PssError::UnknownAlgorithmId(0x7777))
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("SHA-256".parse::<DigestAlg>().unwrap(), DigestAlg::Sha256);
        assert_eq!("sha512".parse::<DigestAlg>().unwrap(), DigestAlg::Sha512);
        assert_eq!("Sha3-256".parse::<DigestAlg>().unwrap(), DigestAlg::Sha3_256);
        assert_eq!("blake3".parse::<DigestAlg>().unwrap(), DigestAlg::Blake3);
        assert!(matches!(
            "MD5".parse::<DigestAlg>(),
            Err(PssError::UnknownAlgorithm(name)) if name == "MD5"
        ));
    }

    #[test]
    fn new_object_is_independent_and_fresh() {
        for alg in DigestAlg::ALL {
            let mut acc = alg.instance();
            acc.update(b"pending");
            let mut other = acc.new_object();
            assert_eq!(other.name(), alg.name());

            other.update(b"abc");
            let mut reference = alg.instance();
            reference.update(b"abc");
            assert_eq!(other.finalize(), reference.finalize(), "{alg}");

            reference.update(b"pending");
            assert_eq!(acc.finalize(), reference.finalize(), "{alg}");
        }
    }

    #[test]
    fn sha256_known_answer() {
        let mut h = DigestAlg::Sha256.instance();
        h.update(b"abc");
        assert_eq!(
            h.finalize(),
            [
                0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
                0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
                0xf2, 0x00, 0x15, 0xad,
            ]
        );
    }
}
