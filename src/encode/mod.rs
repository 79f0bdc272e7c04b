pub mod bit_pack;
pub mod frequency;
pub mod tree;

// Re-export commonly used encoding functionality
pub use bit_pack::{BitPacker, PackedBits};
pub use frequency::ByteFrequency;
pub use tree::{build_codes, Code, CodeTable, CodeTree, Node, NodeId};

// Re-export error types for convenience
pub use crate::utils::error::{HuffError, Result};
