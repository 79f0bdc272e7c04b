// src/encode/tree.rs

//! Huffman tree construction and code assignment.
//!
//! Nodes live in an arena and refer to each other by index. Leaves occupy
//! the first slots in ascending byte order and every merge appends a new
//! internal node, so a node's index doubles as its insertion sequence number.
//! The priority queue orders by `(weight, index)`, which makes ties resolve
//! the same way on both sides of the codec: the decoder only ever sees the
//! frequency table and has to arrive at the identical tree.

use crate::encode::bit_pack::BitPacker;
use crate::encode::frequency::ByteFrequency;
use crate::utils::error::{HuffError, Result};
use bitvec::prelude::*;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// A bit code, first bit first.
pub type Code = BitVec<u8, Msb0>;

/// Index of a node inside a [`CodeTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { byte: u8 },
    Internal { left: NodeId, right: NodeId },
}

/// A binary prefix-code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl CodeTree {
    /// Builds the tree for a non-empty frequency table.
    pub fn build(freq: &ByteFrequency) -> Result<Self> {
        let distinct = freq.distinct();
        let mut nodes = Vec::with_capacity((2 * distinct).saturating_sub(1));
        let mut heap = BinaryHeap::with_capacity(distinct);

        for (byte, count) in freq.iter() {
            let id = nodes.len();
            nodes.push(Node::Leaf { byte });
            heap.push(Reverse((count, id)));
        }

        let root = loop {
            let Reverse((weight, first)) = heap.pop().ok_or(HuffError::EmptyInput)?;
            let Some(Reverse((other, second))) = heap.pop() else {
                break first;
            };
            let id = nodes.len();
            nodes.push(Node::Internal {
                left: first,
                right: second,
            });
            heap.push(Reverse((weight + other, id)));
        };

        let tree = CodeTree { nodes, root };
        debug!(
            "built code tree: {} leaves, {} nodes, depth {}",
            distinct,
            tree.nodes.len(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node at `id`, or `None` if the tree has no such node.
    pub fn get(&self, id: NodeId) -> Option<Node> {
        self.nodes.get(id).copied()
    }

    /// Ids reached from `root()` and the ids stored in internal nodes are
    /// always in range.
    pub(crate) fn node(&self, id: NodeId) -> Node {
        self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least one node.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true when the root is itself a leaf.
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root], Node::Leaf { .. })
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        deepest
    }
}

/// Byte value to code mapping derived from a [`CodeTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Walks every root-to-leaf path, `0` for the left child and `1` for the
    /// right. A tree that is a single leaf gives that byte the code `0`.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut codes = BTreeMap::new();

        if let Node::Leaf { byte } = tree.node(tree.root()) {
            codes.insert(byte, bitvec![u8, Msb0; 0]);
            return CodeTable { codes };
        }

        let mut stack = vec![(tree.root(), Code::new())];
        while let Some((id, code)) = stack.pop() {
            match tree.node(id) {
                Node::Leaf { byte } => {
                    trace!("code {:#04x} -> {:?}", byte, code);
                    codes.insert(byte, code);
                }
                Node::Internal { left, right } => {
                    let mut right_code = code.clone();
                    right_code.push(true);
                    let mut left_code = code;
                    left_code.push(false);
                    stack.push((right, right_code));
                    stack.push((left, left_code));
                }
            }
        }

        CodeTable { codes }
    }

    pub fn get(&self, byte: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&byte).map(|c| c.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(byte, code)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> + '_ {
        self.codes.iter().map(|(&b, c)| (b, c.as_bitslice()))
    }

    /// Appends the code of every byte of `data` to `packer`.
    ///
    /// A table built from `data`'s own frequencies covers every byte.
    pub fn pack_into(&self, data: &[u8], packer: &mut BitPacker) -> Result<()> {
        for &byte in data {
            let code = self.get(byte).ok_or(HuffError::MissingCode(byte))?;
            packer.push_code(code);
        }
        Ok(())
    }

    /// Length of the packed bit stream for an input with these frequencies,
    /// before padding.
    pub fn total_bits(&self, freq: &ByteFrequency) -> u64 {
        freq.iter()
            .map(|(byte, count)| count * self.codes.get(&byte).map_or(0, |c| c.len() as u64))
            .sum()
    }
}

/// Builds the tree and its code table in one step.
pub fn build_codes(freq: &ByteFrequency) -> Result<(CodeTree, CodeTable)> {
    let tree = CodeTree::build(freq)?;
    let table = CodeTable::from_tree(&tree);
    Ok((tree, table))
}
