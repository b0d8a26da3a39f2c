//! Error handling for the codec.
//!
//! Encoding never fails on well-formed input; the variants below describe
//! bit-strings that do not belong to the retained tree, plus the I/O and
//! snapshot failures of the command-line front end.

use thiserror::Error;

/// Main error type for the huffman_codec library
#[derive(Error, Debug)]
pub enum CodecError {
    /// A character other than '0' or '1' in a bit-string
    #[error("Invalid bit {found:?} at position {position}")]
    InvalidBit {
        /// The offending character
        found: char,
        /// Index of the character in the bit-string
        position: usize,
    },

    /// A bit leads to a child the tree does not have
    #[error("No code continues with the bit at position {position}")]
    UnmappedPath {
        /// Index of the bit in the bit-string
        position: usize,
    },

    /// The bit-string ended in the middle of a codeword
    #[error("Bit-string ends inside a codeword started at position {position}")]
    IncompleteCode {
        /// Index of the first bit of the unfinished codeword
        position: usize,
    },

    /// A symbol with no entry in the code table
    #[error("Symbol {symbol} has no code")]
    UnknownSymbol {
        /// Debug rendering of the symbol
        symbol: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report snapshot (bincode) errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
