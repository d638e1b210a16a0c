//! pss/mod.rs
//! EMSA-PSS (MGF1) signature padding.
//!
//! - `encode` / `verify`: pure block construction and validation.
//! - `mgf1`: mask generation shared by both.
//! - `wrapper`: stateful `Pssr` / `PssRaw` paddings owning a hash instance.

pub mod encode;
pub mod mgf1;
pub mod types;
pub mod verify;
pub mod wrapper;

pub use encode::pss_encode;
pub use mgf1::{mgf1, mgf1_mask};
pub use types::*;
pub use verify::pss_verify;
pub use wrapper::*;
