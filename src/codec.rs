//! Encoding and decoding against the tree built from the most recent input.

use std::fmt::Debug;
use std::hash::Hash;

use crate::code::CodeTable;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::stats::EncodingStats;
use crate::tree::{HuffNode, HuffmanTree};

/// Everything derived from one input: frequencies, tree, code table, bit-string and sizes.
///
/// An encoding of empty input holds no tree and decodes every bit-string to nothing.
#[derive(Debug, Clone)]
pub struct Encoding<S: Ord + Hash> {
    frequencies: FrequencyTable<S>,
    tree: Option<HuffmanTree<S>>,
    codes: CodeTable<S>,
    bits: String,
    stats: EncodingStats,
}

impl<S: Ord + Hash> Default for Encoding<S> {
    fn default() -> Self {
        Encoding {
            frequencies: FrequencyTable::default(),
            tree: None,
            codes: CodeTable::default(),
            bits: String::new(),
            stats: EncodingStats::default(),
        }
    }
}

impl<S: Ord + Hash + Clone + Debug> Encoding<S> {
    pub fn new(symbols: &[S]) -> Self {
        let frequencies = FrequencyTable::with_counted_all(symbols);
        let tree = match HuffmanTree::from_frequencies(&frequencies) {
            Some(tree) => tree,
            None => return Self::default(),
        };
        let codes = CodeTable::from_tree(&tree);

        let mut bits = String::with_capacity(codes.encoded_len(&frequencies));
        for symbol in symbols {
            // every input symbol was counted, so every one has a leaf
            if let Some(code) = codes.get(symbol) {
                bits.push_str(code);
            }
        }

        let stats = EncodingStats::new(symbols.len(), bits.len(), frequencies.entropy());
        log::debug!(
            "encoded {} symbols ({} distinct) into {} bits",
            symbols.len(),
            frequencies.len(),
            bits.len()
        );
        Encoding { frequencies, tree: Some(tree), codes, bits, stats }
    }

    /// Decodes `bits` with this encoding's tree; empty without a tree.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        match &self.tree {
            Some(tree) if !bits.is_empty() => {
                let decoded = tree.decode(bits)?;
                log::debug!("decoded {} bits into {} symbols", bits.len(), decoded.len());
                Ok(decoded)
            }
            _ => Ok(Vec::new()),
        }
    }
}

impl<S: Ord + Hash> Encoding<S> {
    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn tree(&self) -> Option<&HuffmanTree<S>> {
        self.tree.as_ref()
    }

    pub fn stats(&self) -> &EncodingStats {
        &self.stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecState {
    /// No tree: nothing encoded yet, or the last input was empty.
    Empty,
    /// Holds the tree of the last non-empty input.
    Ready,
}

/// Keeps the encoding of the most recent input so that later bit-strings can be decoded.
///
/// Each call to [`Codec::encode`] replaces the retained state as a whole.
/// The codec is not meant to be shared between threads while encoding.
#[derive(Debug, Clone)]
pub struct Codec<S: Ord + Hash> {
    current: Encoding<S>,
}

impl<S: Ord + Hash> Default for Codec<S> {
    fn default() -> Self {
        Codec { current: Encoding::default() }
    }
}

impl<S: Ord + Hash + Clone + Debug> Codec<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `symbols` and retains the resulting tree, tables and sizes.
    /// Empty input clears everything, the tree included.
    pub fn encode(&mut self, symbols: &[S]) -> String {
        self.current = Encoding::new(symbols);
        self.current.bits.clone()
    }

    /// Decodes with the tree of the last encode.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        self.current.decode(bits)
    }
}

impl<S: Ord + Hash> Codec<S> {
    pub fn state(&self) -> CodecState {
        match self.current.tree {
            Some(_) => CodecState::Ready,
            None => CodecState::Empty,
        }
    }

    pub fn encoding(&self) -> &Encoding<S> {
        &self.current
    }

    pub fn into_encoding(self) -> Encoding<S> {
        self.current
    }

    pub fn code_table(&self) -> &CodeTable<S> {
        &self.current.codes
    }

    pub fn frequency_table(&self) -> &FrequencyTable<S> {
        &self.current.frequencies
    }

    pub fn original_bits(&self) -> usize {
        self.current.stats.original_bits
    }

    pub fn compressed_bits(&self) -> usize {
        self.current.stats.compressed_bits
    }

    pub fn compression_ratio(&self) -> f64 {
        self.current.stats.compression_ratio()
    }

    pub fn root(&self) -> Option<&HuffNode<S>> {
        self.current.tree.as_ref().map(HuffmanTree::root)
    }
}

impl Codec<char> {
    pub fn encode_text(&mut self, text: &str) -> String {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    pub fn decode_text(&self, bits: &str) -> Result<String> {
        Ok(self.decode(bits)?.into_iter().collect())
    }
}
