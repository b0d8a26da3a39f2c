//! Code table derived from the leaf positions of a Huffman tree.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{CodecError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffNode, HuffmanTree};

/// Codeword used when the whole tree is a single leaf and its path is empty.
pub const LONE_SYMBOL_CODE: &str = "0";

/// Maps every symbol to its codeword, a non-empty string of '0' and '1'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Ord> {
    codes: BTreeMap<S, String>,
}

impl<S: Ord> Default for CodeTable<S> {
    fn default() -> Self {
        CodeTable { codes: BTreeMap::new() }
    }
}

impl<S: Ord + Clone> CodeTable<S> {
    /// Records the root-to-leaf path of each leaf, '0' for left and '1' for right.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();
        let mut prefix = String::new();
        build_codes(tree.root(), &mut prefix, &mut codes);
        CodeTable { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Pairs of symbol and codeword, ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> {
        self.codes.iter().map(|(symbol, code)| (symbol, code.as_str()))
    }

    pub fn as_map(&self) -> &BTreeMap<S, String> {
        &self.codes
    }

    /// Whether no codeword is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix sorts directly before some word it prefixes.
        let mut words: Vec<&str> = self.codes.values().map(String::as_str).collect();
        words.sort_unstable();
        words.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Concatenates the codewords of `symbols` in order.
    pub fn encode<'a, I>(&self, symbols: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a S>,
        S: Debug + 'a,
    {
        let mut bits = String::new();
        for symbol in symbols {
            let code = self.codes.get(symbol).ok_or_else(|| CodecError::UnknownSymbol {
                symbol: format!("{:?}", symbol),
            })?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Length in bits of the encoding of a text with the given `frequencies`.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> usize
    where
        S: Hash,
    {
        frequencies
            .iter()
            .map(|(symbol, count)| self.get(symbol).map_or(0, str::len) * count)
            .sum()
    }
}

fn build_codes<S: Ord + Clone>(node: &HuffNode<S>, prefix: &mut String, codes: &mut BTreeMap<S, String>) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() { LONE_SYMBOL_CODE.to_string() } else { prefix.clone() };
            codes.insert(symbol.clone(), code);
        }
        HuffNode::Internal { left, right, .. } => {
            prefix.push('0');
            build_codes(left, prefix, codes);
            prefix.pop();
            prefix.push('1');
            build_codes(right, prefix, codes);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(text: &str) -> (CodeTable<char>, FrequencyTable<char>) {
        let frequencies: FrequencyTable<char> = text.chars().collect();
        let tree = HuffmanTree::from_frequencies(&frequencies).unwrap();
        (CodeTable::from_tree(&tree), frequencies)
    }

    #[test]
    fn lone_symbol_gets_zero() {
        let (codes, _) = table_of("aaaa");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(&'a'), Some("0"));
    }

    #[test]
    fn codes_follow_tree_paths() {
        // c:2 is popped before the a+b parent (same weight, pushed earlier)
        let (codes, _) = table_of("abcc");
        assert_eq!(codes.get(&'c'), Some("0"));
        assert_eq!(codes.get(&'a'), Some("10"));
        assert_eq!(codes.get(&'b'), Some("11"));
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn prefix_check_detects_prefixes() {
        let mut codes = CodeTable::<char>::default();
        codes.codes.insert('a', "01".to_string());
        codes.codes.insert('b', "0110".to_string());
        codes.codes.insert('c', "1".to_string());
        assert!(!codes.is_prefix_free());
    }

    #[test]
    fn encode_and_weighted_length() {
        let (codes, frequencies) = table_of("abracadabra");
        let text: Vec<char> = "abracadabra".chars().collect();
        let bits = codes.encode(&text).unwrap();
        assert_eq!(bits.len(), codes.encoded_len(&frequencies));
        // optimal weighted path length for a:5 b:2 r:2 c:1 d:1
        assert_eq!(bits.len(), 23);
        assert!(matches!(codes.encode(&['z']), Err(CodecError::UnknownSymbol { .. })));
    }
}
