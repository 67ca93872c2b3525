//! Splitting bit-length inputs into a byte-aligned prefix and a sub-byte tail.
//!
//! Callers supply the significant bits of a trailing partial byte in its
//! high positions. The tail is shifted down so those bits sit in the low
//! positions, which is what the sponge engine expects.

use crate::errors::EngineError;

/// Read-only view of `(data, bit_len)`; `bit_len` need not be a multiple of 8.
#[derive(Debug, Clone, Copy)]
pub struct BitBuffer<'a> {
    data: &'a [u8],
    bit_len: usize,
}

/// A right-justified trailing partial byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tail {
    pub byte: u8,
    pub bits: usize,
}

impl<'a> BitBuffer<'a> {
    pub fn new(data: &'a [u8], bit_len: usize) -> Result<Self, EngineError> {
        let available = data.len().saturating_mul(8);
        if bit_len > available {
            return Err(EngineError::ShortBuffer { bit_len, available });
        }
        Ok(Self { data, bit_len })
    }

    /// Whole-byte input.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_len: data.len() * 8,
        }
    }

    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.bit_len % 8 == 0
    }

    /// The leading whole bytes and their length in bits.
    pub fn aligned_prefix(&self) -> (&'a [u8], usize) {
        let full_bits = self.bit_len - self.bit_len % 8;
        (&self.data[..full_bits / 8], full_bits)
    }

    /// The trailing partial byte, right-justified, if `bit_len % 8 != 0`.
    pub fn tail(&self) -> Option<Tail> {
        let bits = self.bit_len % 8;
        if bits == 0 {
            return None;
        }
        let source = self.data[self.bit_len / 8];
        Some(Tail {
            byte: source >> (8 - bits),
            bits,
        })
    }
}
