/*!
Shared pieces of the huffpack workspace: the error type, symbol decoding and the frequency
analysis of a source.

A symbol is a unicode scalar value (`char`), so a source is read as UTF-8 text.
*/

mod error;
mod table;
pub mod utf8;

use log::*;

pub use error::HuffError;
pub use error::Result;
pub use table::FrequencyTable;

/// The symbol count is stored as 4 bytes in the container header
pub const MAX_SYMBOL_COUNT: u32 = u32::MAX;

/// Byte separating the fields of the container header
pub const SENTINEL: u8 = 255;

/// Symbol of the filler leaf added to trees with less than three symbols.
///
/// It shares its code point with the `SENTINEL` value.
pub const PADDING_SYMBOL: char = '\u{ff}';

/// Counts the occurences of each symbol.
///
/// Fails with `EmptyInput` if there are no symbols and with `Oversize` if there are more than
/// `MAX_SYMBOL_COUNT`.
pub fn count_symbols<I>(symbols: I) -> Result<FrequencyTable>
where
    I: IntoIterator<Item = Result<char>>,
{
    count_symbols_limited(symbols, MAX_SYMBOL_COUNT)
}

/// Like `count_symbols` with a custom upper bound for the total.
pub fn count_symbols_limited<I>(symbols: I, limit: u32) -> Result<FrequencyTable>
where
    I: IntoIterator<Item = Result<char>>,
{
    let mut table = FrequencyTable::new();
    for symbol in symbols {
        table.add(symbol?, limit)?;
    }
    if table.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    debug!(
        "counted {} symbols, alphabet size {}",
        table.total(),
        table.num_symbols()
    );
    Ok(table)
}

/// creates a table with the counts of each symbol in `text`
#[inline]
pub fn count_str(text: &str) -> Result<FrequencyTable> {
    count_symbols(text.chars().map(Ok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::Utf8Symbols;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Setup function that is only run once, even if called multiple times.
    fn setup() {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
    }

    #[test]
    fn test_count_abracadabra() {
        setup();
        let counts = count_str("abracadabra").unwrap();
        assert_eq!(counts.total(), 11);
        assert_eq!(counts.num_symbols(), 5);
        assert_eq!(counts.get('a'), 5);
        assert_eq!(counts.get('b'), 2);
        assert_eq!(counts.get('r'), 2);
        assert_eq!(counts.get('c'), 1);
        assert_eq!(counts.get('d'), 1);
    }

    #[test]
    fn test_count_multibyte() {
        setup();
        let text = "ÿÿ€🦀🦀🦀";
        let counts = count_symbols(Utf8Symbols::new(text.as_bytes())).unwrap();
        // symbols, not bytes
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.get('\u{ff}'), 2);
        assert_eq!(counts.get('€'), 1);
        assert_eq!(counts.get('🦀'), 3);
    }

    #[test]
    fn test_count_empty() {
        setup();
        assert!(matches!(count_str(""), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn test_count_oversize() {
        setup();
        let symbols = std::iter::repeat('a').take(11).map(Ok);
        assert!(matches!(
            count_symbols_limited(symbols, 10),
            Err(HuffError::Oversize { limit: 10 })
        ));
        let symbols = std::iter::repeat('a').take(10).map(Ok);
        assert_eq!(count_symbols_limited(symbols, 10).unwrap().total(), 10);
    }

    #[test]
    fn test_count_propagates_errors() {
        setup();
        let symbols = vec![Ok('a'), Err(HuffError::InvalidEncoding(0xFF)), Ok('b')];
        assert!(matches!(
            count_symbols(symbols),
            Err(HuffError::InvalidEncoding(0xFF))
        ));
    }
}
