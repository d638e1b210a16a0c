//! config.rs
//! Serializable padding configuration.
//!
//! Design notes:
//! - `hash` names a registry entry (`"SHA-256"`, `"SHA3-512"`, `"BLAKE3"`, ...).
//! - `salt_len` absent: salt length = hash output length, any recovered
//!   length accepted. Present: exactly that length, enforced on verify.
//! - `variant` picks `Pssr` (`"digest"`, default) or `PssRaw` (`"raw"`).
//!
//! ```json
//! { "hash": "SHA-256", "salt_len": 32, "variant": "digest" }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::crypto::DigestAlg;
use crate::pss::{PssRaw, Pssr, SignaturePadding};
use crate::types::PssError;
use crate::utils::min_output_bits;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PssVariant {
    #[default]
    Digest,
    Raw,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PssConfig {
    pub hash: DigestAlg,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_len: Option<usize>,
    #[serde(default)]
    pub variant: PssVariant,
}

impl PssConfig {
    pub fn new(hash: DigestAlg) -> Self {
        Self { hash, salt_len: None, variant: PssVariant::Digest }
    }

    pub fn with_salt_len(mut self, salt_len: usize) -> Self {
        self.salt_len = Some(salt_len);
        self
    }

    pub fn raw(mut self) -> Self {
        self.variant = PssVariant::Raw;
        self
    }

    pub fn from_json(s: &str) -> Result<Self, PssError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, PssError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Salt length that will be drawn when signing.
    pub fn effective_salt_len(&self) -> usize {
        self.salt_len.unwrap_or_else(|| self.hash.output_length())
    }

    /// Smallest key size (in bits) this configuration can encode for.
    pub fn min_key_bits(&self) -> usize {
        min_output_bits(self.hash.output_length(), self.effective_salt_len())
    }

    /// Reject configurations that cannot encode for a `key_bits`-bit key.
    pub fn validate_for_key(&self, key_bits: usize) -> Result<(), PssError> {
        let required = self.min_key_bits();
        if key_bits < required {
            return Err(PssError::Config(format!(
                "{}-bit key too small for {} with salt_len={}: need at least {} bits",
                key_bits,
                self.hash,
                self.effective_salt_len(),
                required
            )));
        }
        Ok(())
    }

    /// Build the padding with a fresh hash instance.
    pub fn build(&self) -> Box<dyn SignaturePadding + Send> {
        debug!("pss: building {:?}", self);
        let hash = self.hash.instance();
        match (self.variant, self.salt_len) {
            (PssVariant::Digest, None) => Box::new(Pssr::new(hash)),
            (PssVariant::Digest, Some(len)) => Box::new(Pssr::with_salt_len(hash, len)),
            (PssVariant::Raw, None) => Box::new(PssRaw::new(hash)),
            (PssVariant::Raw, Some(len)) => Box::new(PssRaw::with_salt_len(hash, len)),
        }
    }
}
