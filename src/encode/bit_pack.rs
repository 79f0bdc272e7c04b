// src/encode/bit_pack.rs

//! Packing code bits into bytes and back.
//!
//! Bits are stored MSB-first: the first code bit appended lands in bit 7 of
//! the first output byte. The final byte is filled with zero bits and the
//! number of fill bits is reported separately, because the payload alone
//! cannot tell trailing padding from trailing `0` codes.

use crate::utils::error::{HuffError, Result};
use bitvec::prelude::*;

/// Maximum number of fill bits in the last payload byte.
pub const MAX_PADDING: u8 = 7;

/// Accumulates code bits for the packed payload.
#[derive(Debug, Default)]
pub struct BitPacker {
    bits: BitVec<u8, Msb0>,
}

impl BitPacker {
    pub fn new() -> Self {
        Self {
            bits: BitVec::new(),
        }
    }

    /// Creates a packer with room for `bit_count` bits.
    pub fn with_capacity(bit_count: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bit_count),
        }
    }

    /// Appends one code, first bit first.
    pub fn push_code(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Number of code bits appended so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Pads to a byte boundary and returns the payload with its pad length.
    pub fn finish(mut self) -> PackedBits {
        let padding = ((8 - self.bits.len() % 8) % 8) as u8;
        self.bits.resize(self.bits.len() + padding as usize, false);
        PackedBits {
            bytes: self.bits.into_vec(),
            padding,
        }
    }
}

/// A byte-aligned payload and the number of zero bits filling its last byte.
///
/// Only [`BitPacker::finish`] creates one, so the padding is always 0-7 and
/// never larger than the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    bytes: Vec<u8>,
    padding: u8,
}

impl PackedBits {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of meaningful bits in the payload.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 - self.padding as usize
    }
}

/// Expands `bytes` into bits and drops the trailing `padding` bits.
pub fn unpack(bytes: &[u8], padding: u8) -> Result<&BitSlice<u8, Msb0>> {
    if padding > MAX_PADDING {
        return Err(HuffError::InvalidPadding(padding));
    }
    let bits = bytes.view_bits::<Msb0>();
    let len = bits
        .len()
        .checked_sub(padding as usize)
        .ok_or_else(|| HuffError::malformed(format!("{} padding bits but no payload", padding)))?;
    Ok(&bits[..len])
}
