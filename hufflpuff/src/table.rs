use std::collections::BTreeMap;

use crate::tree::Code;

/// Maps every symbol of a tree to its prefix code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        CodeTable::default()
    }

    /// Keeps an already present code, so the first leaf of a symbol wins.
    pub(crate) fn insert_first(&mut self, symbol: char, code: Code) {
        self.codes.entry(symbol).or_insert(code);
    }

    #[inline]
    pub fn get(&self, symbol: char) -> Option<Code> {
        self.codes.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Code)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, *code))
    }

    /// true if no code is the prefix of another code and all codes are non-empty
    pub fn is_prefix_free(&self) -> bool {
        self.find_prefix_violation().is_none()
    }

    pub(crate) fn find_prefix_violation(&self) -> Option<(Code, Code)> {
        let codes = self.codes.values().copied().collect::<Vec<_>>();
        for (pos, code) in codes.iter().enumerate() {
            if code.number_bits() == 0 {
                return Some((*code, *code));
            }
            for other in &codes[pos + 1..] {
                if code.is_prefix_of(other) || other.is_prefix_of(code) {
                    return Some((*code, *other));
                }
            }
        }
        None
    }
}
