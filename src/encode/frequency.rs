// src/encode/frequency.rs

//! Byte frequency analysis.

/// Occurrence counts for each of the 256 byte values.
///
/// Iteration always runs in ascending byte order, which is the order the
/// container serializes entries in and the order the tree builder seeds its
/// queue with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteFrequency {
    counts: [u64; 256],
}

impl ByteFrequency {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Counts every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut freq = Self::new();
        for &byte in data {
            freq.counts[byte as usize] += 1;
        }
        freq
    }

    /// Sets the count for `byte`, replacing any previous value.
    pub fn set(&mut self, byte: u8, count: u64) {
        self.counts[byte as usize] = count;
    }

    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of byte values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(byte, count)` pairs with a non-zero count, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0)
            .map(|(b, &c)| (b as u8, c))
    }
}

impl Default for ByteFrequency {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(u8, u64)> for ByteFrequency {
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut freq = Self::new();
        for (byte, count) in iter {
            freq.set(byte, count);
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_occurrence() {
        let freq = ByteFrequency::from_bytes(b"AAAAABBBCC");
        assert_eq!(freq.get(b'A'), 5);
        assert_eq!(freq.get(b'B'), 3);
        assert_eq!(freq.get(b'C'), 2);
        assert_eq!(freq.get(b'D'), 0);
        assert_eq!(freq.distinct(), 3);
        assert_eq!(freq.total(), 10);
    }

    #[test]
    fn test_empty_input() {
        let freq = ByteFrequency::from_bytes(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.iter().count(), 0);
    }

    #[test]
    fn test_iter_is_ascending() {
        let freq = ByteFrequency::from_bytes(&[0xff, 0x00, 0x80, 0x00]);
        let entries: Vec<_> = freq.iter().collect();
        assert_eq!(entries, vec![(0x00, 2), (0x80, 1), (0xff, 1)]);
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(
            ByteFrequency::from_bytes(b"abcabc"),
            ByteFrequency::from_bytes(b"cbaacb")
        );
    }
}
