//! crypto/hash.rs
//! Hash capability consumed by the padding engine.
//!
//! Design notes:
//! - The engine is generic over this trait and never names a concrete hash.
//! - `finalize` must leave the instance reset: the engine reuses one instance
//!   for the M' hash and every MGF1 block.
//! - `new_object` hands out an independent instance of the same algorithm, so
//!   a caller accumulating a message can run the engine on a second one.

/// Streaming hash function with a fixed output length.
pub trait HashFunction {
    /// Canonical algorithm name, e.g. `SHA-256`.
    fn name(&self) -> String;

    /// Digest size in bytes.
    fn output_length(&self) -> usize;

    /// Absorb more input.
    fn update(&mut self, input: &[u8]);

    /// Produce the digest of everything absorbed since the last reset, then reset.
    fn finalize(&mut self) -> Vec<u8>;

    /// Fresh instance of the same algorithm with no absorbed input.
    fn new_object(&self) -> Box<dyn HashFunction + Send>;

    /// Drop any absorbed input.
    fn clear(&mut self) {
        let _ = self.finalize();
    }
}

impl<H: HashFunction + ?Sized> HashFunction for Box<H> {
    #[inline]
    fn name(&self) -> String {
        (**self).name()
    }

    #[inline]
    fn output_length(&self) -> usize {
        (**self).output_length()
    }

    #[inline]
    fn update(&mut self, input: &[u8]) {
        (**self).update(input)
    }

    #[inline]
    fn finalize(&mut self) -> Vec<u8> {
        (**self).finalize()
    }

    #[inline]
    fn new_object(&self) -> Box<dyn HashFunction + Send> {
        (**self).new_object()
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }
}
