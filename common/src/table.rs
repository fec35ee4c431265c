use std::collections::BTreeMap;

use crate::HuffError;
use crate::Result;

/// Number of occurences of each symbol in a source, plus the total number of symbols.
///
/// Symbols are kept ordered by code point, so iteration order does not depend on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u32>,
    total: u32,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// counts one more `symbol`, failing if the total would exceed `limit`
    #[inline]
    pub(crate) fn add(&mut self, symbol: char, limit: u32) -> Result<()> {
        if self.total >= limit {
            return Err(HuffError::Oversize { limit });
        }
        self.total += 1;
        *self.counts.entry(symbol).or_insert(0) += 1;
        Ok(())
    }

    pub fn get(&self, symbol: char) -> u32 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// number of distinct symbols, the alphabet size
    pub fn num_symbols(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }

    /// All symbols with their count, the most frequent first.
    ///
    /// Symbols with equal counts stay in code point order.
    pub fn sorted_by_count(&self) -> Vec<(char, u32)> {
        let mut symbols = self.iter().collect::<Vec<_>>();
        symbols.sort_by(|a, b| b.1.cmp(&a.1));
        symbols
    }
}
