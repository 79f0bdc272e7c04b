// src/container/byte_stream.rs

//! Little-endian field access for the container preamble.
//!
//! Every short read is reported as a malformed container naming the field
//! that ran out, rather than as a bare I/O error.

use crate::utils::error::{HuffError, Result};
use bytemuck::{Pod, Zeroable, cast_slice};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Size in bytes of one `(byte, count)` table entry.
pub const ENTRY_SIZE: usize = std::mem::size_of::<RawEntry>();

fn short_read(field: &str) -> impl FnOnce(io::Error) -> HuffError + '_ {
    move |err| match err.kind() {
        io::ErrorKind::UnexpectedEof => HuffError::malformed(format!("missing {}", field)),
        _ => HuffError::Io(err),
    }
}

/// Reads container fields from any byte source.
pub trait ContainerRead: Read {
    fn read_field_u8(&mut self, field: &str) -> Result<u8> {
        ReadBytesExt::read_u8(self).map_err(short_read(field))
    }

    fn read_field_u32(&mut self, field: &str) -> Result<u32> {
        ReadBytesExt::read_u32::<LittleEndian>(self).map_err(short_read(field))
    }

    /// Reads `count` packed table entries in one pass.
    fn read_entries(&mut self, count: usize) -> Result<Vec<RawEntry>> {
        let mut buffer = vec![0u8; count * ENTRY_SIZE];
        self.read_exact(&mut buffer).map_err(|err| match err.kind() {
            io::ErrorKind::UnexpectedEof => HuffError::malformed(format!(
                "table declares {} entries but the data ends before they are all present",
                count
            )),
            _ => HuffError::Io(err),
        })?;
        Ok(cast_slice::<u8, RawEntry>(&buffer).to_vec())
    }
}

impl<R: Read + ?Sized> ContainerRead for R {}

/// Writes container fields to any byte sink.
pub trait ContainerWrite: Write {
    fn write_field_u8(&mut self, value: u8) -> Result<()> {
        Ok(WriteBytesExt::write_u8(self, value)?)
    }

    fn write_field_u32(&mut self, value: u32) -> Result<()> {
        Ok(WriteBytesExt::write_u32::<LittleEndian>(self, value)?)
    }

    fn write_entries(&mut self, entries: &[RawEntry]) -> Result<()> {
        self.write_all(cast_slice(entries))?;
        Ok(())
    }
}

impl<W: Write + ?Sized> ContainerWrite for W {}

/// Little-endian u32 that can be safely cast to/from bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct LeU32([u8; 4]);

impl From<u32> for LeU32 {
    fn from(value: u32) -> Self {
        LeU32(value.to_le_bytes())
    }
}

impl From<LeU32> for u32 {
    fn from(value: LeU32) -> Self {
        u32::from_le_bytes(value.0)
    }
}

/// One frequency table entry exactly as it appears on disk.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct RawEntry {
    pub byte: u8,
    pub count: LeU32,
}

impl RawEntry {
    pub fn new(byte: u8, count: u32) -> Self {
        Self {
            byte,
            count: count.into(),
        }
    }

    pub fn count(&self) -> u32 {
        self.count.into()
    }
}
