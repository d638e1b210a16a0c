//! buffer.rs
//! Bounded writer over a pre-sized output buffer.
//!
//! Design notes:
//! - The encoder sizes its output up front and then lays out padding, marker,
//!   salt, hash and trailer through this cursor.
//! - Writing past the end, or finishing before the buffer is full, is a bug in
//!   the caller's size arithmetic and panics. It is never a recoverable error.

pub struct BufferStuffer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BufferStuffer<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Copy `bytes` at the cursor.
    pub fn append(&mut self, bytes: &[u8]) {
        let end = self.reserve(bytes.len());
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    #[inline]
    pub fn append_byte(&mut self, byte: u8) {
        self.append_repeated(byte, 1);
    }

    /// Write `count` copies of `byte` at the cursor.
    pub fn append_repeated(&mut self, byte: u8, count: usize) {
        let end = self.reserve(count);
        self.buf[self.pos..end].fill(byte);
        self.pos = end;
    }

    /// Bytes written so far, for in-place post-processing (masking).
    #[inline]
    pub fn written_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.pos]
    }

    /// Consume the cursor, asserting the buffer was filled exactly.
    pub fn finish(self) {
        assert!(
            self.full(),
            "BufferStuffer underfilled: {} of {} bytes written",
            self.pos,
            self.buf.len()
        );
    }

    fn reserve(&self, count: usize) -> usize {
        assert!(
            count <= self.remaining_capacity(),
            "BufferStuffer overflow: need {} bytes, {} remaining",
            count,
            self.remaining_capacity()
        );
        self.pos + count
    }
}
