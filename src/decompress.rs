use bitstream::read_byte;
use bitstream::BitReader;
use common::utf8::decode_symbol;
use common::utf8::symbol_width;
use common::HuffError;
use common::Result;
use common::PADDING_SYMBOL;
use common::SENTINEL;
use hufflpuff::decode_symbols;
use hufflpuff::Tree;
use log::*;
use std::io::Read;
use std::io::Write;

use crate::MAGIC;

/// The decoded container header. `Debug` summarizes the tree by its leaf count and depth.
#[derive(Debug)]
pub struct Header {
    pub num_symbols: u32,
    pub tree: Tree,
}

/// Reads a container from `input` and writes the decoded text to `out`.
///
/// Returns the number of decoded symbols.
pub fn decompress_to<R: Read, W: Write>(input: &mut R, out: &mut W) -> Result<u32> {
    let header = read_header(input)?;
    debug!(
        "header: {} symbols, {} leaves",
        header.num_symbols,
        header.tree.num_leaves()
    );
    decode_symbols(input, &header.tree, header.num_symbols, out)
}

pub fn read_header<R: Read>(input: &mut R) -> Result<Header> {
    match read_byte(input)? {
        Some(MAGIC) => {}
        Some(_) => return Err(HuffError::Format("not a huffpack container, bad magic byte")),
        None => return Err(HuffError::Format("input is empty")),
    }

    let mut count = [0_u8; 4];
    for byte in count.iter_mut() {
        *byte = read_byte(input)?.ok_or(HuffError::Format("header ended in the symbol count"))?;
    }
    let num_symbols = u32::from_be_bytes(count);
    expect_sentinel(input, "missing sentinel after the symbol count")?;

    let shape = read_shape(input)?;
    expect_sentinel(input, "missing sentinel after the tree shape")?;

    let num_leaves = shape.iter().filter(|is_leaf| **is_leaf).count();
    let mut symbols = Vec::with_capacity(num_leaves);
    for _ in 0..num_leaves {
        symbols.push(read_leaf_symbol(input)?);
    }
    expect_sentinel(input, "missing sentinel after the leaf symbols")?;

    let tree = Tree::from_preorder(&shape, &symbols).ok_or(HuffError::Format("invalid tree shape"))?;
    Ok(Header { num_symbols, tree })
}

/// Reads preorder shape bits until the tree is complete.
///
/// Every bit fills one open child slot, a `0` (internal node) opens two new ones. The padding
/// bits of the last shape byte are skipped. Shape bytes may take any value including `SENTINEL`.
fn read_shape<R: Read>(input: &mut R) -> Result<Vec<bool>> {
    let mut bit_d = BitReader::new();
    let mut shape = vec![];
    let mut open_slots = 1_usize;
    while open_slots > 0 {
        let is_leaf = bit_d
            .read_bit(input)?
            .ok_or(HuffError::Format("header ended in the tree shape"))?;
        shape.push(is_leaf);
        open_slots -= 1;
        if !is_leaf {
            open_slots += 2;
        }
    }
    Ok(shape)
}

fn read_leaf_symbol<R: Read>(input: &mut R) -> Result<char> {
    let lead = read_byte(input)?.ok_or(HuffError::Format("header ended in the leaf symbols"))?;
    if lead == SENTINEL {
        // a raw padding leaf
        return Ok(PADDING_SYMBOL);
    }
    let width = symbol_width(lead)?;
    let mut buf = [lead, 0, 0, 0];
    for slot in buf[1..width].iter_mut() {
        *slot = read_byte(input)?.ok_or(HuffError::Format("header ended in the leaf symbols"))?;
    }
    decode_symbol(&buf[..width])
}

fn expect_sentinel<R: Read>(input: &mut R, msg: &'static str) -> Result<()> {
    match read_byte(input)? {
        Some(SENTINEL) => Ok(()),
        _ => Err(HuffError::Format(msg)),
    }
}
