//! Counting symbol occurrences.

use std::collections::HashMap;
use std::hash::Hash;

/// Number of occurrences of every symbol seen in the most recent input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Hash + Eq> {
    counts: HashMap<S, usize>,
}

impl<S: Hash + Eq> Default for FrequencyTable<S> {
    fn default() -> Self {
        FrequencyTable { counts: HashMap::new() }
    }
}

impl<S: Hash + Eq + Clone> FrequencyTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a table counting all symbols exposed by `symbols`.
    pub fn with_counted_all<'a, I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut table = Self::new();
        for symbol in symbols {
            table.count(symbol.clone());
        }
        table
    }

    /// Adds one to the stored number of `symbol` occurrences.
    pub fn count(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of counted occurrences, i.e. the length of the input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.counts.iter().map(|(symbol, count)| (symbol, *count))
    }

    /// Returns the Shannon entropy, in bits per symbol, of the values counted so far.
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }
        -self
            .counts
            .values()
            .map(|count| {
                let p = *count as f64 / total;
                p * p.log2()
            })
            .sum::<f64>()
    }
}

impl<S: Hash + Eq + Ord + Clone> FrequencyTable<S> {
    /// Pairs of symbol and count, ordered by count and then by symbol.
    pub fn sorted_by_count(&self) -> Vec<(S, usize)> {
        let mut pairs: Vec<(S, usize)> = self
            .counts
            .iter()
            .map(|(symbol, count)| (symbol.clone(), *count))
            .collect();
        pairs.sort_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| a.cmp(b)));
        pairs
    }

    /// Pairs of symbol and count, ordered by symbol.
    pub fn sorted_by_symbol(&self) -> Vec<(S, usize)> {
        let mut pairs: Vec<(S, usize)> = self
            .counts
            .iter()
            .map(|(symbol, count)| (symbol.clone(), *count))
            .collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        pairs
    }
}

impl<S: Hash + Eq + Clone> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.count(symbol);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_symbol() {
        let table: FrequencyTable<char> = "abracadabra".chars().collect();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(&'a'), Some(5));
        assert_eq!(table.get(&'b'), Some(2));
        assert_eq!(table.get(&'r'), Some(2));
        assert_eq!(table.get(&'c'), Some(1));
        assert_eq!(table.get(&'d'), Some(1));
        assert_eq!(table.get(&'z'), None);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn sorted_by_count_breaks_ties_by_symbol() {
        let table = FrequencyTable::with_counted_all(&['b', 'a', 'c', 'c']);
        assert_eq!(table.sorted_by_count(), vec![('a', 1), ('b', 1), ('c', 2)]);
        assert_eq!(table.sorted_by_symbol(), vec![('a', 1), ('b', 1), ('c', 2)]);
    }

    #[test]
    fn entropy() {
        let uniform: FrequencyTable<u8> = [0u8, 1, 2, 3].into_iter().collect();
        assert!((uniform.entropy() - 2.0).abs() < 1e-12);
        let single: FrequencyTable<u8> = [7u8, 7, 7].into_iter().collect();
        assert_eq!(single.entropy(), 0.0);
        assert_eq!(FrequencyTable::<u8>::new().entropy(), 0.0);
    }
}
