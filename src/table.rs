use common::FrequencyTable;
use hufflpuff::Code;
use hufflpuff::CodeTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTableEntry {
    pub symbol: char,
    pub count: u32,
    pub code: Code,
}

/// Symbols with their counts and codes, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTableReport {
    entries: Vec<CodeTableEntry>,
}

impl CodeTableReport {
    pub fn new(counts: &FrequencyTable, table: &CodeTable) -> Self {
        let entries = counts
            .sorted_by_count()
            .into_iter()
            .filter_map(|(symbol, count)| {
                table.get(symbol).map(|code| CodeTableEntry {
                    symbol,
                    count,
                    code,
                })
            })
            .collect();
        CodeTableReport { entries }
    }

    pub fn entries(&self) -> &[CodeTableEntry] {
        &self.entries
    }

    /// average number of payload bits per symbol
    pub fn average_code_length(&self) -> f64 {
        let (bits, total) = self.entries.iter().fold((0_u64, 0_u64), |(bits, total), entry| {
            (
                bits + entry.count as u64 * entry.code.number_bits() as u64,
                total + entry.count as u64,
            )
        });
        if total == 0 {
            return 0.0;
        }
        bits as f64 / total as f64
    }
}

impl core::fmt::Display for CodeTableReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:<10} {:>10}  code", "symbol", "count")?;
        for entry in &self.entries {
            let symbol = format!("{:?}", entry.symbol);
            writeln!(f, "{:<10} {:>10}  {}", symbol, entry.count, entry.code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::count_str;
    use hufflpuff::build_tree;
    use hufflpuff::tree_to_table;

    fn report(text: &str) -> CodeTableReport {
        let counts = count_str(text).unwrap();
        let table = tree_to_table(&build_tree(&counts).unwrap());
        CodeTableReport::new(&counts, &table)
    }

    #[test]
    fn test_report_order() {
        let report = report("abracadabra");
        let symbols = report.entries().iter().map(|e| e.symbol).collect::<String>();
        assert_eq!(symbols, "abrcd");
        assert_eq!(report.entries()[0].count, 5);
        assert_eq!(report.entries()[0].code.to_string(), "0");
        // 23 bits for 11 symbols
        assert!((report.average_code_length() - 23.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_display() {
        let text = report("abracadabra").to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("symbol"));
        assert_eq!(lines[1], "'a'                 5  0");
        assert!(lines[5].ends_with("1111"));
    }

    #[test]
    fn test_report_skips_padding_leaf() {
        let report = report("aaaa");
        assert_eq!(report.entries().len(), 1);
    }
}
