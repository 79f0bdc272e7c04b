pub mod walker;

pub use walker::{TreeWalker, WalkState};

use crate::encode::tree::CodeTree;
use crate::utils::error::{HuffError, Result};
use bitvec::prelude::*;
use log::debug;

/// Decodes every bit of `bits` against `tree`.
///
/// `expected_len` is the total of the frequency table the tree was built
/// from; a payload that yields any other number of bytes is rejected.
pub fn decode_bits(
    tree: &CodeTree,
    bits: &BitSlice<u8, Msb0>,
    expected_len: u64,
) -> Result<Vec<u8>> {
    let mut walker = TreeWalker::new(tree);
    // Every byte costs at least one bit, so the bit count bounds the output.
    let capacity = bits
        .len()
        .min(usize::try_from(expected_len).unwrap_or(usize::MAX));
    let mut out = Vec::with_capacity(capacity);

    for bit in bits.iter().by_vals() {
        if let Some(byte) = walker.step(bit)? {
            out.push(byte);
        }
    }
    walker.finish()?;

    if out.len() as u64 != expected_len {
        return Err(HuffError::LengthMismatch {
            expected: expected_len,
            actual: out.len() as u64,
        });
    }

    debug!("decoded {} bits into {} bytes", bits.len(), out.len());
    Ok(out)
}
