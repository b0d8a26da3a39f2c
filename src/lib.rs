//! # huffman_codec
//!
//! Builds a prefix-free binary code from symbol frequencies with the greedy
//! Huffman merge, encodes a symbol sequence into a string of '0' and '1',
//! and decodes it back with the retained tree.
//!
//! ```
//! use huffman_codec::Codec;
//!
//! let mut codec = Codec::<char>::new();
//! let bits = codec.encode_text("abracadabra");
//! assert_eq!(codec.decode_text(&bits).unwrap(), "abracadabra");
//! assert_eq!(codec.original_bits(), 88);
//! assert_eq!(codec.compressed_bits(), bits.len());
//! ```

pub mod code;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod report;
pub mod stats;
pub mod tree;

pub use code::CodeTable;
pub use codec::{Codec, CodecState, Encoding};
pub use error::{CodecError, Result};
pub use frequency::FrequencyTable;
pub use report::Report;
pub use stats::{EncodingStats, BITS_PER_SYMBOL};
pub use tree::{HuffNode, HuffmanTree};
