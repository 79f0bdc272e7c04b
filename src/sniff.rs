// src/sniff.rs

//! Text versus binary classification of input data.

use std::fmt;

/// How many leading bytes are inspected.
pub const SNIFF_LEN: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Binary,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::Binary => write!(f, "binary"),
        }
    }
}

/// Classifies `data` by its first [`SNIFF_LEN`] bytes.
///
/// Any control byte other than tab, line feed, vertical tab, form feed or
/// carriage return marks the data as binary. Empty data counts as text.
pub fn sniff(data: &[u8]) -> ContentKind {
    let head = &data[..data.len().min(SNIFF_LEN)];
    if head.iter().any(|&b| b < 9 || (14..32).contains(&b)) {
        ContentKind::Binary
    } else {
        ContentKind::Text
    }
}
