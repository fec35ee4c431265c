/*!

Bitstream handles the writing and reading of single bits packed into bytes.

Bits are packed MSB first: the first bit added ends up in the highest bit of the first byte.
A partially filled last byte is shifted left, so the unused low bits are zero.

Both buffers hold at most one byte of state, they never own the underlying reader or writer.
This keeps them usable for several consecutive sections of the same stream, e.g. a header
field followed by a payload.

*/

use std::io;
use std::io::Read;
use std::io::Write;

pub const NUM_BITS_IN_BYTE: u8 = 8;

/// Collects bits and emits every completed byte to the output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitWriter {
    buffer: u8,
    /// Number of bits in `buffer`, always smaller than NUM_BITS_IN_BYTE between calls
    bits_filled: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter {
            buffer: 0,
            bits_filled: 0,
        }
    }

    #[inline]
    pub fn bits_filled(&self) -> u8 {
        self.bits_filled
    }

    #[inline]
    pub fn add_bit<W: Write>(&mut self, bit: bool, out: &mut W) -> io::Result<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.bits_filled += 1;
        if self.bits_filled == NUM_BITS_IN_BYTE {
            out.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.bits_filled = 0;
        }
        Ok(())
    }

    /// Adds the lowest `nb_bits` of `value`, the highest of them first.
    #[inline]
    pub fn add_bits<W: Write>(&mut self, value: u64, nb_bits: u8, out: &mut W) -> io::Result<()> {
        debug_assert!(nb_bits <= 64);
        for shift in (0..nb_bits).rev() {
            self.add_bit((value >> shift) & 1 == 1, out)?;
        }
        Ok(())
    }

    /// Writes the pending bits, if any, as a zero padded byte.
    ///
    /// Returns the number of padding bits appended.
    pub fn finish_stream<W: Write>(self, out: &mut W) -> io::Result<u8> {
        if self.bits_filled == 0 {
            return Ok(0);
        }
        let padding = NUM_BITS_IN_BYTE - self.bits_filled;
        out.write_all(&[self.buffer << padding])?;
        Ok(padding)
    }
}

/// Hands out the bits of the input one at a time, refilling itself every 8 bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitReader {
    buffer: u8,
    bits_left: u8,
}

impl BitReader {
    pub fn new() -> Self {
        BitReader {
            buffer: 0,
            bits_left: 0,
        }
    }

    /// Bits of the current byte which were not handed out yet.
    #[inline]
    pub fn bits_left(&self) -> u8 {
        self.bits_left
    }

    /// Returns `None` when the buffered byte is used up and the input is at its end.
    ///
    /// A new byte is only pulled from `input` when the previous one is fully consumed, so the
    /// bytes following a bit field are left untouched in the input.
    #[inline]
    pub fn read_bit<R: Read>(&mut self, input: &mut R) -> io::Result<Option<bool>> {
        if self.bits_left == 0 {
            match read_byte(input)? {
                Some(byte) => {
                    self.buffer = byte;
                    self.bits_left = NUM_BITS_IN_BYTE;
                }
                None => return Ok(None),
            }
        }
        self.bits_left -= 1;
        Ok(Some((self.buffer >> self.bits_left) & 1 == 1))
    }
}

/// Reads a single byte, `None` at the end of input.
#[inline]
pub fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0_u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}
