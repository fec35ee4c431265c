//! UTF-8 handling for symbols. Used for the source text as well as for the leaf symbol field
//! of the container header.

use crate::HuffError;
use crate::Result;
use std::io;
use std::io::Bytes;
use std::io::Read;
use std::io::Write;

pub const MAX_SYMBOL_WIDTH: usize = 4;

/// Number of bytes in the sequence introduced by `lead`, taken from its high bits.
///
/// ```text
/// 0xxxxxxx                             1 byte
/// 110xxxxx 10xxxxxx                    2 bytes
/// 1110xxxx 10xxxxxx 10xxxxxx           3 bytes
/// 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx  4 bytes
/// ```
#[inline]
pub fn symbol_width(lead: u8) -> Result<usize> {
    if lead & 0x80 == 0 {
        Ok(1)
    } else if lead & 0xE0 == 0xC0 {
        Ok(2)
    } else if lead & 0xF0 == 0xE0 {
        Ok(3)
    } else if lead & 0xF8 == 0xF0 {
        Ok(4)
    } else {
        Err(HuffError::InvalidEncoding(lead))
    }
}

/// Decodes exactly one symbol from a complete sequence.
///
/// Bad continuation bytes, overlong forms and surrogates are rejected.
pub fn decode_symbol(bytes: &[u8]) -> Result<char> {
    let lead = match bytes.first() {
        Some(lead) => *lead,
        None => return Err(HuffError::InvalidEncoding(0)),
    };
    let text = std::str::from_utf8(bytes).map_err(|_| HuffError::InvalidEncoding(lead))?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(HuffError::InvalidEncoding(lead)),
    }
}

#[inline]
pub fn write_symbol<W: Write>(symbol: char, out: &mut W) -> io::Result<()> {
    let mut buf = [0_u8; MAX_SYMBOL_WIDTH];
    out.write_all(symbol.encode_utf8(&mut buf).as_bytes())
}

/// Iterates over the symbols of a UTF-8 encoded reader.
///
/// The reader should be buffered, bytes are pulled one at a time.
pub struct Utf8Symbols<R> {
    bytes: Bytes<R>,
}

impl<R: Read> Utf8Symbols<R> {
    pub fn new(input: R) -> Self {
        Utf8Symbols {
            bytes: input.bytes(),
        }
    }

    fn next_symbol(&mut self, lead: u8) -> Result<char> {
        let width = symbol_width(lead)?;
        let mut buf = [lead, 0, 0, 0];
        for slot in buf[1..width].iter_mut() {
            *slot = match self.bytes.next() {
                Some(byte) => byte?,
                // sequence cut off by the end of the input
                None => return Err(HuffError::InvalidEncoding(lead)),
            };
        }
        decode_symbol(&buf[..width])
    }
}

impl<R: Read> Iterator for Utf8Symbols<R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let lead = match self.bytes.next()? {
            Ok(lead) => lead,
            Err(err) => return Some(Err(err.into())),
        };
        Some(self.next_symbol(lead))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_width() {
        assert_eq!(symbol_width(b'a').unwrap(), 1);
        assert_eq!(symbol_width(0xC3).unwrap(), 2);
        assert_eq!(symbol_width(0xE2).unwrap(), 3);
        assert_eq!(symbol_width(0xF0).unwrap(), 4);
        // continuation byte and the sentinel are no lead bytes
        assert!(matches!(symbol_width(0x80), Err(HuffError::InvalidEncoding(0x80))));
        assert!(matches!(symbol_width(0xFF), Err(HuffError::InvalidEncoding(0xFF))));
        assert!(matches!(symbol_width(0xF8), Err(HuffError::InvalidEncoding(0xF8))));
    }

    #[test]
    fn test_decode_symbol() {
        assert_eq!(decode_symbol(b"a").unwrap(), 'a');
        assert_eq!(decode_symbol(&[0xC3, 0xBF]).unwrap(), '\u{ff}');
        assert_eq!(decode_symbol("€".as_bytes()).unwrap(), '€');
        assert_eq!(decode_symbol("🦀".as_bytes()).unwrap(), '🦀');
        // overlong '/'
        assert!(decode_symbol(&[0xC0, 0xAF]).is_err());
        // bad continuation
        assert!(decode_symbol(&[0xC3, 0x41]).is_err());
        // surrogate half
        assert!(decode_symbol(&[0xED, 0xA0, 0x80]).is_err());
        assert!(decode_symbol(&[]).is_err());
    }

    #[test]
    fn test_symbols_iter() {
        let text = "añ€🦀";
        let symbols = Utf8Symbols::new(text.as_bytes())
            .collect::<Result<Vec<char>>>()
            .unwrap();
        assert_eq!(symbols, vec!['a', 'ñ', '€', '🦀']);
    }

    #[test]
    fn test_symbols_iter_truncated() {
        let bytes = &"a€".as_bytes()[..3];
        let mut symbols = Utf8Symbols::new(bytes);
        assert_eq!(symbols.next().unwrap().unwrap(), 'a');
        assert!(matches!(symbols.next(), Some(Err(HuffError::InvalidEncoding(0xE2)))));
    }

    #[test]
    fn test_write_symbol() {
        let mut out = vec![];
        write_symbol('\u{ff}', &mut out).unwrap();
        write_symbol('H', &mut out).unwrap();
        assert_eq!(out, vec![0xC3, 0xBF, b'H']);
    }
}
