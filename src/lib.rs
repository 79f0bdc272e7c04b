//! A lossless byte-stream compressor built on Huffman coding.
//!
//! Encoding counts byte frequencies, builds a Huffman tree, packs each
//! byte's code into a dense bit stream and stores the frequency table in
//! front of it. Decoding rebuilds the identical tree from that table and
//! walks it bit by bit.
//!
//! # Quick Start
//!
//! ```
//! let packed = huffpack::encode(b"AAAAABBBCC")?;
//! let restored = huffpack::decode(&packed)?;
//! assert_eq!(restored, b"AAAAABBBCC");
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! # Container Format
//!
//! ```text
//! [entry count: u32 LE]
//! entry count times: [byte value: u8][count: u32 LE]
//! [padding bits: u8, 0-7]
//! [payload: remaining bytes]
//! ```

// Core modules
pub mod codec;
pub mod container;
pub mod decode;
pub mod encode;
pub mod file;
pub mod sniff;
pub mod utils;

// Public codec API
pub use codec::{Codec, EmptyInputPolicy, decode, encode};

// Building blocks (for custom pipelines)
pub use container::Container;
pub use encode::{BitPacker, ByteFrequency, CodeTable, CodeTree, PackedBits};
pub use sniff::{ContentKind, sniff};

// Error types
pub use utils::error::{HuffError, Result};

// Constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
