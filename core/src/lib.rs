//! pss-core
//!
//! EMSA-PSS signature padding with MGF1.
//! Builds and checks the block an RSA-style trapdoor signs; never performs
//! the asymmetric operation itself.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod buffer;
pub mod config;

pub mod crypto;
pub mod telemetry;

// Padding engine
pub mod pss;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{PssConfig, PssVariant};
    pub use crate::crypto::{DigestAlg, HashFunction};
    pub use crate::pss::{pss_encode, pss_verify, PssRaw, Pssr, SaltPolicy, SignaturePadding};
    pub use crate::telemetry::PaddingCounters;
    pub use crate::types::PssError;
}
