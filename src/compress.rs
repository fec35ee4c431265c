use bitstream::BitWriter;
use common::utf8::write_symbol;
use common::FrequencyTable;
use common::HuffError;
use common::Result;
use common::SENTINEL;
use hufflpuff::build_tree;
use hufflpuff::encode_symbols;
use hufflpuff::tree_to_table;
use hufflpuff::CodeTable;
use hufflpuff::Tree;
use log::*;
use std::io::Write;

use crate::MAGIC;

/// Writes a complete container: header followed by the payload of `symbols`.
///
/// `counts` must be the frequency table of `symbols`, the symbols are consumed only once.
/// Fails with `SourceChanged` if `symbols` yields a different number of symbols.
pub fn compress_to<I, W>(counts: &FrequencyTable, symbols: I, out: &mut W) -> Result<CodeTable>
where
    I: IntoIterator<Item = Result<char>>,
    W: Write,
{
    let tree = build_tree(counts)?;
    let table = tree_to_table(&tree);
    write_header(&tree, counts.total(), out)?;
    let num_symbols = encode_symbols(symbols, &table, out)?;
    if num_symbols != counts.total() {
        return Err(HuffError::SourceChanged {
            expected: counts.total(),
            actual: num_symbols,
        });
    }
    trace!(
        "encoded {} symbols, estimated payload {} bytes",
        num_symbols,
        tree.estimate_compressed_size(counts)
    );
    Ok(table)
}

/// magic, symbol count, tree shape and leaf symbols, each field closed by `SENTINEL`
pub fn write_header<W: Write>(tree: &Tree, num_symbols: u32, out: &mut W) -> Result<()> {
    out.write_all(&[MAGIC])?;
    out.write_all(&num_symbols.to_be_bytes())?;
    out.write_all(&[SENTINEL])?;

    let mut shape = vec![];
    let mut symbols = vec![];
    tree.walk_tree(&mut |node, _transitions, _depth| {
        shape.push(node.is_leaf());
        if let Some(symbol) = node.symbol() {
            symbols.push(symbol);
        }
    });

    let mut bit_c = BitWriter::new();
    for is_leaf in shape {
        bit_c.add_bit(is_leaf, out)?;
    }
    bit_c.finish_stream(out)?;
    out.write_all(&[SENTINEL])?;

    for symbol in symbols {
        write_symbol(symbol, out)?;
    }
    out.write_all(&[SENTINEL])?;
    Ok(())
}
