use bitstream::read_byte;
use common::Result;
use log::*;
use std::io::Read;
use std::io::Write;

use crate::decompress::read_header;
use crate::decompress::Header;
use crate::MAGIC;

/// payload bytes per line of the dump
const BYTES_PER_LINE: usize = 8;

/// Writes a readable listing of the container in `input` to `out`.
///
/// The header fields come first, the shape bits and payload bytes are printed as `0`/`1`
/// groups of one byte each. Padding bits are included, the payload is not decoded.
///
/// ```text
/// [header]
/// magic: H
/// symbols: 11
/// shape: 01010101 1
/// leaves: 'a' 'r' 'b' 'c' 'd'
/// [payload]
/// 01101001 11001111 01101000
/// ```
pub fn dump_to<R: Read, W: Write>(input: &mut R, out: &mut W) -> Result<Header> {
    let header = read_header(input)?;

    let mut shape = String::new();
    let mut leaves = vec![];
    header.tree.walk_tree(&mut |node, _transitions, _depth| {
        if !shape.is_empty() && shape.len() % 9 == 8 {
            shape.push(' ');
        }
        shape.push(if node.is_leaf() { '1' } else { '0' });
        if let Some(symbol) = node.symbol() {
            leaves.push(format!("{:?}", symbol));
        }
    });

    writeln!(out, "[header]")?;
    writeln!(out, "magic: {}", MAGIC as char)?;
    writeln!(out, "symbols: {}", header.num_symbols)?;
    writeln!(out, "shape: {}", shape)?;
    writeln!(out, "leaves: {}", leaves.join(" "))?;

    writeln!(out, "[payload]")?;
    let mut num_bytes = 0_usize;
    while let Some(byte) = read_byte(input)? {
        if num_bytes > 0 {
            let separator = if num_bytes % BYTES_PER_LINE == 0 { "\n" } else { " " };
            out.write_all(separator.as_bytes())?;
        }
        write!(out, "{:08b}", byte)?;
        num_bytes += 1;
    }
    writeln!(out)?;
    debug!(
        "dumped header with {} leaves and {} payload bytes",
        leaves.len(),
        num_bytes
    );
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::HuffError;

    fn dump_str(data: &[u8]) -> Result<String> {
        let mut out = vec![];
        dump_to(&mut &data[..], &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_dump_abracadabra() {
        let data = [
            b'H', 0, 0, 0, 11, 0xFF, 0x55, 0x80, 0xFF, b'a', b'r', b'b', b'c', b'd', 0xFF, 0x69,
            0xCF, 0x68,
        ];
        assert_eq!(
            dump_str(&data).unwrap(),
            "[header]\n\
             magic: H\n\
             symbols: 11\n\
             shape: 01010101 1\n\
             leaves: 'a' 'r' 'b' 'c' 'd'\n\
             [payload]\n\
             01101001 11001111 01101000\n"
        );
    }

    #[test]
    fn test_dump_padding_leaf() {
        let data = [b'H', 0, 0, 0, 4, 0xFF, 0x60, 0xFF, b'a', 0xC3, 0xBF, 0xFF, 0x00];
        let text = dump_str(&data).unwrap();
        assert!(text.contains("shape: 011\n"));
        assert!(text.contains("leaves: 'a' 'ÿ'\n"));
        assert!(text.ends_with("[payload]\n00000000\n"));
    }

    #[test]
    fn test_dump_wraps_payload_lines() {
        let mut data = vec![b'H', 0, 0, 0, 9, 0xFF, 0x60, 0xFF, b'a', 0xC3, 0xBF, 0xFF];
        data.extend(vec![0_u8; 9]);
        let text = dump_str(&data).unwrap();
        let payload = text.split("[payload]\n").nth(1).unwrap();
        let lines = payload.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(' ').count(), BYTES_PER_LINE);
        assert_eq!(lines[1], "00000000");
    }

    #[test]
    fn test_dump_bad_header() {
        assert!(matches!(dump_str(b"Xabc"), Err(HuffError::Format(_))));
    }
}
