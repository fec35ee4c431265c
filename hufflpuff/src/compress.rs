use bitstream::BitWriter;
use common::HuffError;
use common::Result;
use common::MAX_SYMBOL_COUNT;
use std::io::Write;

use crate::table::CodeTable;

/// Writes the code of every symbol to `out` and pads the last byte with zero bits.
///
/// Returns the number of encoded symbols.
pub fn encode_symbols<I, W>(symbols: I, table: &CodeTable, out: &mut W) -> Result<u32>
where
    I: IntoIterator<Item = Result<char>>,
    W: Write,
{
    let mut bit_c = BitWriter::new();
    let mut num_symbols = 0_u32;
    for symbol in symbols {
        huf_encode_symbol(symbol?, &mut bit_c, table, out)?;
        num_symbols = num_symbols.checked_add(1).ok_or(HuffError::Oversize {
            limit: MAX_SYMBOL_COUNT,
        })?;
    }
    bit_c.finish_stream(out)?;
    Ok(num_symbols)
}

#[inline]
fn huf_encode_symbol<W: Write>(
    symbol: char,
    bit_c: &mut BitWriter,
    table: &CodeTable,
    out: &mut W,
) -> Result<()> {
    let code = table.get(symbol).ok_or(HuffError::UnknownSymbol(symbol))?;
    bit_c.add_bits(code.val, code.number_bits, out)?;
    Ok(())
}
