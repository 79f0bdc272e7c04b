// src/file.rs

//! Whole-file helpers around the in-memory codec.
//!
//! These read the entire input into memory, run [`Codec`](crate::Codec) and
//! write the result in one go. Argument handling and user-facing messages
//! belong to the caller.

use crate::codec::Codec;
use crate::sniff::{ContentKind, sniff};
use crate::utils::error::Result;
use log::info;
use std::fs;
use std::path::Path;

/// Conventional output name for compressed files.
pub const DEFAULT_COMPRESSED_NAME: &str = "compressed.huf";

/// Conventional output name for decompressed files.
pub const DEFAULT_DECOMPRESSED_NAME: &str = "decompressed.txt";

/// Sizes and classification of one file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    pub input_len: u64,
    pub output_len: u64,
    /// Classification of the file that was read.
    pub kind: ContentKind,
}

impl FileReport {
    /// Output size divided by input size; 0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            self.output_len as f64 / self.input_len as f64
        }
    }
}

/// Compresses the file at `input` into `output`.
pub fn compress_file(codec: &Codec, input: &Path, output: &Path) -> Result<FileReport> {
    let data = fs::read(input)?;
    let kind = sniff(&data);
    let packed = codec.encode(&data)?;
    fs::write(output, &packed)?;

    let report = FileReport {
        input_len: data.len() as u64,
        output_len: packed.len() as u64,
        kind,
    };
    info!(
        "compressed {} ({}, {} bytes) into {} ({} bytes)",
        input.display(),
        kind,
        report.input_len,
        output.display(),
        report.output_len
    );
    Ok(report)
}

/// Decompresses the container at `input` into `output`.
pub fn decompress_file(codec: &Codec, input: &Path, output: &Path) -> Result<FileReport> {
    let data = fs::read(input)?;
    let kind = sniff(&data);
    let restored = codec.decode(&data)?;
    fs::write(output, &restored)?;

    let report = FileReport {
        input_len: data.len() as u64,
        output_len: restored.len() as u64,
        kind,
    };
    info!(
        "decompressed {} ({} bytes) into {} ({} bytes)",
        input.display(),
        report.input_len,
        output.display(),
        report.output_len
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HuffError;
    use tempfile::tempdir;

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("input.txt");
        let packed = dir.path().join(DEFAULT_COMPRESSED_NAME);
        let restored = dir.path().join(DEFAULT_DECOMPRESSED_NAME);

        let text = "the rain in spain stays mainly in the plain\n".repeat(50);
        fs::write(&source, &text).unwrap();

        let codec = Codec::new();
        let report = compress_file(&codec, &source, &packed).unwrap();
        assert_eq!(report.kind, ContentKind::Text);
        assert_eq!(report.input_len, text.len() as u64);
        assert!(report.ratio() < 1.0);

        let back = decompress_file(&codec, &packed, &restored).unwrap();
        assert_eq!(back.output_len, text.len() as u64);
        assert_eq!(fs::read(&restored).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_binary_input_is_reported() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("blob.bin");
        let packed = dir.path().join("blob.huf");
        fs::write(&source, [0u8, 1, 2, 3, 255, 0, 0]).unwrap();

        let report = compress_file(&Codec::new(), &source, &packed).unwrap();
        assert_eq!(report.kind, ContentKind::Binary);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let err = compress_file(
            &Codec::new(),
            &dir.path().join("absent"),
            &dir.path().join("out"),
        )
        .unwrap_err();
        assert!(matches!(err, HuffError::Io(_)));
    }

    #[test]
    fn test_empty_report_ratio() {
        let report = FileReport {
            input_len: 0,
            output_len: 5,
            kind: ContentKind::Text,
        };
        assert_eq!(report.ratio(), 0.0);
    }
}
