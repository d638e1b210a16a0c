pub mod ct;
pub mod digest;
pub mod hash;

pub use self::digest::*;
pub use self::hash::*;
