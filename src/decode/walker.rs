// src/decode/walker.rs

//! Bit-by-bit traversal of a code tree.

use crate::encode::tree::{CodeTree, Node, NodeId};
use crate::utils::error::{HuffError, Result};

/// Where the walker sits between bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// At the root, between two codes.
    AtRoot,
    /// Partway down a code; the node and how many bits led there.
    Descending { node: NodeId, depth: usize },
}

/// Turns a bit sequence back into bytes by walking a [`CodeTree`].
///
/// A `0` bit moves to the left child and a `1` bit to the right. Reaching a
/// leaf yields its byte and returns the walker to the root. A tree that is a
/// single leaf accepts only `0` bits, one per byte.
#[derive(Debug)]
pub struct TreeWalker<'a> {
    tree: &'a CodeTree,
    state: WalkState,
    consumed: usize,
}

impl<'a> TreeWalker<'a> {
    pub fn new(tree: &'a CodeTree) -> Self {
        Self {
            tree,
            state: WalkState::AtRoot,
            consumed: 0,
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Total bits consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Consumes one bit. Returns the byte when the bit completes a code.
    pub fn step(&mut self, bit: bool) -> Result<Option<u8>> {
        let bit_offset = self.consumed;
        self.consumed += 1;

        let (current, depth) = match self.state {
            WalkState::AtRoot => (self.tree.root(), 0),
            WalkState::Descending { node, depth } => (node, depth),
        };

        let next = match self.tree.node(current) {
            Node::Internal { left, right } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            // Single-leaf tree: the only valid code is `0`.
            Node::Leaf { byte } => {
                return if bit {
                    Err(HuffError::InvalidCode { bit_offset })
                } else {
                    Ok(Some(byte))
                };
            }
        };

        match self.tree.node(next) {
            Node::Leaf { byte } => {
                self.state = WalkState::AtRoot;
                Ok(Some(byte))
            }
            Node::Internal { .. } => {
                self.state = WalkState::Descending {
                    node: next,
                    depth: depth + 1,
                };
                Ok(None)
            }
        }
    }

    /// Checks that the walk ended on a code boundary.
    pub fn finish(self) -> Result<()> {
        match self.state {
            WalkState::AtRoot => Ok(()),
            WalkState::Descending { depth, .. } => Err(HuffError::TruncatedBitstream { depth }),
        }
    }
}
