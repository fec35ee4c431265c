use bitstream::BitReader;
use common::utf8::write_symbol;
use common::HuffError;
use common::Result;
use std::io::Read;
use std::io::Write;

use crate::tree::Node;
use crate::tree::Tree;

/// Decodes `num_symbols` symbols from the bits of `input` and writes them UTF-8 encoded.
///
/// Bits after the last symbol are padding and left unread.
pub fn decode_symbols<R, W>(input: &mut R, tree: &Tree, num_symbols: u32, out: &mut W) -> Result<u32>
where
    R: Read,
    W: Write,
{
    if num_symbols == 0 {
        return Ok(0);
    }
    if tree.root().is_leaf() {
        return Err(HuffError::Format("tree root is a leaf"));
    }
    let mut bit_d = BitReader::new();
    for _ in 0..num_symbols {
        let symbol = huf_decode_symbol(&mut bit_d, tree, input)?;
        write_symbol(symbol, out)?;
    }
    Ok(num_symbols)
}

#[inline]
fn huf_decode_symbol<R: Read>(bit_d: &mut BitReader, tree: &Tree, input: &mut R) -> Result<char> {
    let mut node = tree.root();
    loop {
        match node {
            Node::Leaf { symbol } => return Ok(*symbol),
            Node::Internal { left, right } => {
                let bit = bit_d.read_bit(input)?.ok_or(HuffError::Format(
                    "payload ended before all symbols were decoded",
                ))?;
                node = if bit { &**right } else { &**left };
            }
        }
    }
}
