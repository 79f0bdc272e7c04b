// src/container/mod.rs

//! The on-disk container: frequency table, padding count, packed payload.
//!
//! ```text
//! [entry count: u32 LE]
//! entry count times: [byte value: u8][count: u32 LE]
//! [padding bits: u8, 0-7]
//! [payload: remaining bytes]
//! ```
//!
//! Entries are written in ascending byte order. The decoder rebuilds the
//! code tree from this table, so the order is part of the format.

pub mod byte_stream;

use crate::encode::bit_pack::{self, PackedBits};
use crate::encode::frequency::ByteFrequency;
use crate::utils::error::{HuffError, Result};
use bitvec::prelude::*;
use byte_stream::{ContainerRead, ContainerWrite, ENTRY_SIZE, RawEntry};
use log::debug;
use std::io::{Cursor, Write};

/// Bytes taken by the entry count and the padding byte.
const FIXED_HEADER_SIZE: usize = 4 + 1;

/// Largest number of distinct byte values a table can hold.
pub const MAX_ENTRIES: usize = 256;

/// A parsed or to-be-written container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub frequencies: ByteFrequency,
    pub padding: u8,
    pub payload: Vec<u8>,
}

impl Container {
    pub fn new(frequencies: ByteFrequency, packed: PackedBits) -> Self {
        Self {
            frequencies,
            padding: packed.padding(),
            payload: packed.into_bytes(),
        }
    }

    /// Size of the preamble in bytes.
    pub fn header_len(&self) -> usize {
        FIXED_HEADER_SIZE + self.frequencies.distinct() * ENTRY_SIZE
    }

    /// The payload bits with the padding trimmed off.
    pub fn bits(&self) -> Result<&BitSlice<u8, Msb0>> {
        bit_pack::unpack(&self.payload, self.padding)
    }

    /// Serializes the container into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.padding > bit_pack::MAX_PADDING {
            return Err(HuffError::InvalidPadding(self.padding));
        }

        let entries = self
            .frequencies
            .iter()
            .map(|(byte, count)| {
                u32::try_from(count)
                    .map(|count| RawEntry::new(byte, count))
                    .map_err(|_| HuffError::InputTooLarge { len: count })
            })
            .collect::<Result<Vec<_>>>()?;

        writer.write_field_u32(entries.len() as u32)?;
        writer.write_entries(&entries)?;
        writer.write_field_u8(self.padding)?;
        writer.write_all(&self.payload)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.header_len() + self.payload.len());
        self.write_to(&mut out)?;
        debug!(
            "wrote container: {} table entries, {} payload bytes, {} padding bits",
            self.frequencies.distinct(),
            self.payload.len(),
            self.padding
        );
        Ok(out)
    }

    /// Parses and validates a complete container.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);

        let declared = cursor.read_field_u32("entry count")? as usize;
        if declared > MAX_ENTRIES {
            return Err(HuffError::malformed(format!(
                "table declares {} entries, at most {} are possible",
                declared, MAX_ENTRIES
            )));
        }
        let available = data.len().saturating_sub(FIXED_HEADER_SIZE - 1);
        if declared * ENTRY_SIZE > available {
            return Err(HuffError::malformed(format!(
                "table declares {} entries but only {} bytes follow the entry count",
                declared, available
            )));
        }

        let mut frequencies = ByteFrequency::new();
        let mut previous: Option<u8> = None;
        for entry in cursor.read_entries(declared)? {
            if previous.is_some_and(|p| entry.byte <= p) {
                return Err(HuffError::malformed(format!(
                    "table entry {:#04x} is out of order or repeated",
                    entry.byte
                )));
            }
            if entry.count() == 0 {
                return Err(HuffError::malformed(format!(
                    "table entry {:#04x} has a zero count",
                    entry.byte
                )));
            }
            frequencies.set(entry.byte, entry.count() as u64);
            previous = Some(entry.byte);
        }

        let padding = cursor.read_field_u8("padding byte")?;
        if padding > bit_pack::MAX_PADDING {
            return Err(HuffError::InvalidPadding(padding));
        }

        let payload = data[cursor.position() as usize..].to_vec();
        if declared == 0 && (padding != 0 || !payload.is_empty()) {
            return Err(HuffError::malformed(
                "empty table followed by a non-empty payload",
            ));
        }

        debug!(
            "read container: {} table entries, {} payload bytes, {} padding bits",
            declared,
            payload.len(),
            padding
        );
        Ok(Container {
            frequencies,
            padding,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Container {
        let frequencies = ByteFrequency::from_bytes(b"AAAAABBBCC");
        Container {
            frequencies,
            padding: 1,
            payload: vec![0x05, 0xff, 0xa0],
        }
    }

    #[test]
    fn test_layout() {
        let bytes = sample().to_bytes().unwrap();
        let expected: Vec<u8> = [
            &[3, 0, 0, 0][..],
            &[b'A', 5, 0, 0, 0],
            &[b'B', 3, 0, 0, 0],
            &[b'C', 2, 0, 0, 0],
            &[1],
            &[0x05, 0xff, 0xa0],
        ]
        .concat();
        assert_eq!(bytes, expected);
        assert_eq!(sample().header_len(), 20);
    }

    #[test]
    fn test_parse_written_container() {
        let original = sample();
        let parsed = Container::from_bytes(&original.to_bytes().unwrap()).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.bits().unwrap().len(), 23);
    }

    #[test]
    fn test_declared_entries_exceed_data() {
        // Five entries declared, two present, then padding and payload.
        let data: Vec<u8> = [
            &[5, 0, 0, 0][..],
            &[b'A', 5, 0, 0, 0],
            &[b'B', 3, 0, 0, 0],
            &[0, 0x12, 0x34],
        ]
        .concat();
        assert!(matches!(
            Container::from_bytes(&data),
            Err(HuffError::MalformedContainer(_))
        ));
    }

    #[test]
    fn test_too_many_entries() {
        let mut data = vec![0x01, 0x01, 0, 0];
        data.extend(std::iter::repeat_n(0u8, 2000));
        assert!(matches!(
            Container::from_bytes(&data),
            Err(HuffError::MalformedContainer(_))
        ));
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            Container::from_bytes(&[]),
            Err(HuffError::MalformedContainer(_))
        ));
        assert!(matches!(
            Container::from_bytes(&[1, 0, 0, 0, b'A', 1, 0, 0, 0]),
            Err(HuffError::MalformedContainer(_))
        ));
    }

    #[test]
    fn test_padding_out_of_range() {
        let data = [1, 0, 0, 0, b'A', 1, 0, 0, 0, 8, 0x00];
        assert!(matches!(
            Container::from_bytes(&data),
            Err(HuffError::InvalidPadding(8))
        ));
    }

    #[test]
    fn test_writer_rejects_padding_out_of_range() {
        let container = Container {
            frequencies: ByteFrequency::from_bytes(b"A"),
            padding: 9,
            payload: Vec::new(),
        };
        assert!(matches!(
            container.to_bytes(),
            Err(HuffError::InvalidPadding(9))
        ));
    }

    #[test]
    fn test_count_too_large_for_field() {
        let mut frequencies = ByteFrequency::new();
        frequencies.set(b'A', u32::MAX as u64 + 1);
        let container = Container {
            frequencies,
            padding: 0,
            payload: Vec::new(),
        };
        assert!(matches!(
            container.to_bytes(),
            Err(HuffError::InputTooLarge { len }) if len == u32::MAX as u64 + 1
        ));

        frequencies = ByteFrequency::new();
        frequencies.set(b'A', u32::MAX as u64);
        let fits = Container {
            frequencies,
            padding: 0,
            payload: Vec::new(),
        };
        assert!(fits.to_bytes().is_ok());
    }

    #[test]
    fn test_unordered_or_zero_entries() {
        let unordered = [2, 0, 0, 0, b'B', 1, 0, 0, 0, b'A', 1, 0, 0, 0, 6, 0x40];
        assert!(Container::from_bytes(&unordered).is_err());

        let repeated = [2, 0, 0, 0, b'A', 1, 0, 0, 0, b'A', 1, 0, 0, 0, 6, 0x40];
        assert!(Container::from_bytes(&repeated).is_err());

        let zero = [1, 0, 0, 0, b'A', 0, 0, 0, 0, 0];
        assert!(Container::from_bytes(&zero).is_err());
    }

    #[test]
    fn test_empty_table() {
        let parsed = Container::from_bytes(&[0, 0, 0, 0, 0]).unwrap();
        assert!(parsed.frequencies.is_empty());
        assert!(parsed.payload.is_empty());

        assert!(Container::from_bytes(&[0, 0, 0, 0, 0, 0xff]).is_err());
    }
}
