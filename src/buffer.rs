use std::borrow::Cow;

use crate::error::ContractViolation;

/// A caller-owned, fixed-capacity byte buffer with an explicit length.
///
/// The widget never grows the slice. Content always leaves at least one free
/// slot, and the slot right after the content is kept at `0` so the owner can
/// keep treating the slice as NUL-terminated.
#[derive(Debug)]
pub struct TextBuffer<'a> {
    bytes: &'a mut [u8],
    len: usize,
}

impl<'a> TextBuffer<'a> {
    /// Wraps `bytes`, whose first `len` bytes are the current content.
    pub fn new(bytes: &'a mut [u8], len: usize) -> Result<Self, ContractViolation> {
        let capacity = bytes.len();
        if capacity == 0 {
            return Err(ContractViolation::ZeroCapacity);
        }
        if len >= capacity {
            return Err(ContractViolation::ContentTooLong { len, capacity });
        }
        bytes[len] = 0;
        Ok(Self { bytes, len })
    }

    /// Wraps a NUL-terminated buffer; the content ends at the first `0` byte.
    pub fn from_terminated(bytes: &'a mut [u8]) -> Result<Self, ContractViolation> {
        let capacity = bytes.len();
        if capacity == 0 {
            return Err(ContractViolation::ZeroCapacity);
        }
        let len = bytes
            .iter()
            .position(|&b| b == 0)
            .ok_or(ContractViolation::Unterminated { capacity })?;
        Self::new(bytes, len)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slots, including the guard slot.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Whether another byte would leave no guard slot.
    pub fn is_full(&self) -> bool {
        self.len + 1 >= self.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Inserts `byte` at `at`, shifting the tail right.
    ///
    /// Returns `false` and leaves the buffer untouched when it is full.
    pub(crate) fn insert(&mut self, at: usize, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        let at = at.min(self.len);
        self.bytes.copy_within(at..self.len, at + 1);
        self.bytes[at] = byte;
        self.len += 1;
        self.bytes[self.len] = 0;
        true
    }

    /// Removes the byte at `at`, shifting the tail left and clearing the
    /// vacated slot.
    pub(crate) fn remove(&mut self, at: usize) -> bool {
        if at >= self.len {
            return false;
        }
        self.bytes.copy_within(at + 1..self.len, at);
        self.len -= 1;
        self.bytes[self.len] = 0;
        true
    }

    /// Drops all content, zeroing the old bytes.
    pub(crate) fn clear(&mut self) {
        self.bytes[..=self.len].fill(0);
        self.len = 0;
    }
}
