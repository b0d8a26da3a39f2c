//! Size accounting for one encoding.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Width of one symbol in the fixed-width baseline.
pub const BITS_PER_SYMBOL: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodingStats {
    /// Input length times [`BITS_PER_SYMBOL`].
    pub original_bits: usize,
    /// Length of the produced bit-string.
    pub compressed_bits: usize,
    /// Shannon entropy of the input, in bits per symbol.
    pub entropy: f64,
}

impl EncodingStats {
    pub fn new(symbol_count: usize, compressed_bits: usize, entropy: f64) -> Self {
        EncodingStats {
            original_bits: symbol_count * BITS_PER_SYMBOL,
            compressed_bits,
            entropy,
        }
    }

    pub fn symbol_count(&self) -> usize {
        self.original_bits / BITS_PER_SYMBOL
    }

    /// Compressed size as a percentage of the original size; 0.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.compressed_bits as f64 / self.original_bits as f64 * 100.0
    }

    /// Average codeword length in bits per symbol.
    pub fn average_code_length(&self) -> f64 {
        match self.symbol_count() {
            0 => 0.0,
            n => self.compressed_bits as f64 / n as f64,
        }
    }
}

impl fmt::Display for EncodingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Size: {} bits", self.original_bits)?;
        writeln!(f, "Compressed Size: {} bits", self.compressed_bits)?;
        writeln!(f, "Entropy: {:.3} bits/symbol", self.entropy)?;
        writeln!(f, "Average Code Length: {:.3} bits/symbol", self.average_code_length())?;
        write!(f, "Compression Ratio: {:.2}% (smaller is better)", self.compression_ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_empty_input_is_zero() {
        let stats = EncodingStats::default();
        assert_eq!(stats.compression_ratio(), 0.0);
        assert_eq!(stats.average_code_length(), 0.0);
    }

    #[test]
    fn four_symbols_four_bits() {
        let stats = EncodingStats::new(4, 4, 0.0);
        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.symbol_count(), 4);
        assert_eq!(stats.compression_ratio(), 12.5);
        assert_eq!(stats.average_code_length(), 1.0);
    }

    #[test]
    fn display() {
        let text = EncodingStats::new(4, 4, 0.0).to_string();
        assert!(text.starts_with("Original Size: 32 bits\nCompressed Size: 4 bits\n"));
        assert!(text.ends_with("Compression Ratio: 12.50% (smaller is better)"));
    }
}
