// src/codec.rs

//! The encode and decode pipelines.
//!
//! # Examples
//!
//! ```
//! use huffpack::{Codec, EmptyInputPolicy};
//!
//! let packed = huffpack::encode(b"AAAAABBBCC")?;
//! assert_eq!(huffpack::decode(&packed)?, b"AAAAABBBCC");
//!
//! let strict = Codec::new().with_empty_input(EmptyInputPolicy::Reject);
//! assert!(strict.encode(b"").is_err());
//! # Ok::<(), huffpack::HuffError>(())
//! ```

use crate::container::Container;
use crate::decode::decode_bits;
use crate::encode::bit_pack::BitPacker;
use crate::encode::frequency::ByteFrequency;
use crate::encode::tree::{CodeTable, CodeTree};
use crate::utils::error::{HuffError, Result};
use log::debug;

/// What `encode` does with a zero-length input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Write a container with an empty table and no payload.
    #[default]
    Allow,
    /// Fail with [`HuffError::EmptyInput`].
    Reject,
}

/// A configured Huffman codec.
///
/// Holds only configuration; every call builds its own frequency table,
/// tree and code table, so one codec can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codec {
    empty_input: EmptyInputPolicy,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for zero-length inputs.
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    pub fn empty_input(&self) -> EmptyInputPolicy {
        self.empty_input
    }

    /// Compresses `data` into a self-describing container.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let len = data.len() as u64;
        if len > u32::MAX as u64 {
            return Err(HuffError::InputTooLarge { len });
        }

        let frequencies = ByteFrequency::from_bytes(data);
        if frequencies.is_empty() {
            if self.empty_input == EmptyInputPolicy::Reject {
                return Err(HuffError::EmptyInput);
            }
            debug!("encoding empty input as an empty container");
            return Container::new(frequencies, BitPacker::new().finish()).to_bytes();
        }

        let tree = CodeTree::build(&frequencies)?;
        let table = CodeTable::from_tree(&tree);

        let total_bits = table.total_bits(&frequencies);
        let mut packer = BitPacker::with_capacity(usize::try_from(total_bits).unwrap_or(0));
        table.pack_into(data, &mut packer)?;
        let packed = packer.finish();

        debug!(
            "encoded {} bytes into {} bits ({} payload bytes, {} padding)",
            data.len(),
            total_bits,
            packed.bytes().len(),
            packed.padding()
        );
        Container::new(frequencies, packed).to_bytes()
    }

    /// Restores the original bytes from a container.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let container = Container::from_bytes(data)?;
        if container.frequencies.is_empty() {
            return Ok(Vec::new());
        }

        let tree = CodeTree::build(&container.frequencies)?;
        let bits = container.bits()?;
        decode_bits(&tree, bits, container.frequencies.total())
    }
}

/// Compresses `data` with the default codec.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    Codec::new().encode(data)
}

/// Decompresses a container produced by [`encode`].
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    Codec::new().decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_scenario() {
        let packed = encode(b"AAAAABBBCC").unwrap();
        // 20-byte preamble, 15 code bits in 2 bytes with 1 padding bit.
        assert_eq!(packed.len(), 22);
        assert_eq!(packed[19], 1);
        // A A A A A B B B C C -> 0 0 0 0 0 11 11 11 10 10
        assert_eq!(&packed[20..], &[0b0000_0111, 0b1111_0100]);
        assert_eq!(decode(&packed).unwrap(), b"AAAAABBBCC");
    }

    #[test]
    fn test_single_byte_input() {
        let packed = encode(&[0x41]).unwrap();
        assert_eq!(packed, vec![1, 0, 0, 0, 0x41, 1, 0, 0, 0, 7, 0x00]);
        assert_eq!(decode(&packed).unwrap(), vec![0x41]);
    }

    #[test]
    fn test_repeated_single_byte() {
        let data = vec![0u8; 1000];
        let packed = encode(&data).unwrap();
        assert_eq!(packed.len(), 10 + 125);
        assert_eq!(decode(&packed).unwrap(), data);
    }

    #[test]
    fn test_empty_input_policies() {
        let packed = encode(&[]).unwrap();
        assert_eq!(packed, vec![0, 0, 0, 0, 0]);
        assert!(decode(&packed).unwrap().is_empty());

        let strict = Codec::new().with_empty_input(EmptyInputPolicy::Reject);
        assert_eq!(strict.empty_input(), EmptyInputPolicy::Reject);
        assert!(matches!(strict.encode(&[]), Err(HuffError::EmptyInput)));
        // Decoding is unaffected by the policy.
        assert!(strict.decode(&packed).unwrap().is_empty());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let data = b"she sells sea shells by the sea shore";
        assert_eq!(encode(data).unwrap(), encode(data).unwrap());
    }

    #[test]
    fn test_truncated_payload() {
        let mut packed = encode(b"AAAAABBBCC").unwrap();
        // Keep 5 bits: "00000" decodes to five A's, fewer than the table says.
        packed.truncate(21);
        packed[19] = 3;
        assert!(matches!(
            decode(&packed),
            Err(HuffError::LengthMismatch { expected: 10, actual: 5 })
        ));

        // Keep 6 bits: "000001" stops one bit into a two-bit code.
        packed[19] = 2;
        assert!(matches!(
            decode(&packed),
            Err(HuffError::TruncatedBitstream { depth: 1 })
        ));
    }

    #[test]
    fn test_extra_payload_bytes() {
        let mut packed = encode(b"AAAAABBBCC").unwrap();
        packed.push(0x00);
        assert!(matches!(
            decode(&packed),
            Err(HuffError::LengthMismatch { expected: 10, .. })
        ));
    }
}
