//! Owned snapshot of an encoding for display or storage by a front end.

use std::fmt::{self, Debug};
use std::hash::Hash;

use serde_derive::{Deserialize, Serialize};

use crate::codec::Encoding;
use crate::stats::EncodingStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub symbol: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeRow {
    pub symbol: String,
    pub code: String,
}

/// Frequency listing, code listing and statistics of one encoding.
/// Symbols are rendered with their `Debug` form and listed in symbol order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub frequencies: Vec<FrequencyRow>,
    pub codes: Vec<CodeRow>,
    pub stats: EncodingStats,
    /// Levels of the tree, 0 when there is none.
    pub tree_depth: usize,
}

impl Report {
    pub fn new<S: Ord + Hash + Clone + Debug>(encoding: &Encoding<S>) -> Self {
        let frequencies = encoding
            .frequencies()
            .sorted_by_symbol()
            .into_iter()
            .map(|(symbol, count)| FrequencyRow { symbol: format!("{:?}", symbol), count })
            .collect();
        let codes = encoding
            .codes()
            .iter()
            .map(|(symbol, code)| CodeRow { symbol: format!("{:?}", symbol), code: code.to_string() })
            .collect();
        Report {
            frequencies,
            codes,
            stats: *encoding.stats(),
            tree_depth: encoding.tree().map_or(0, |tree| tree.depth()),
        }
    }

    /// Writes the report with bincode.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> crate::Result<()> {
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub fn read_from<R: std::io::Read>(reader: R) -> crate::Result<Self> {
        Ok(bincode::deserialize_from(reader)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10} {:<10}", "symbol", "count")?;
        writeln!(f, "{}", "-".repeat(20))?;
        for row in &self.frequencies {
            writeln!(f, "{:<10} {:<10}", row.symbol, row.count)?;
        }
        writeln!(f)?;
        writeln!(f, "{:<10} {:<20}", "symbol", "code")?;
        writeln!(f, "{}", "-".repeat(30))?;
        for row in &self.codes {
            writeln!(f, "{:<10} {:<20}", row.symbol, row.code)?;
        }
        writeln!(f)?;
        writeln!(f, "Tree Depth: {}", self.tree_depth)?;
        write!(f, "{}", self.stats)
    }
}
