/*!
huffpack compresses UTF-8 text files with a static huffman code.

A source is read twice: the first pass counts how often each unicode scalar value occurs, the
second pass encodes it. The output is a single container file:

```text
'H' | symbol count (u32, big endian) | 0xFF
    | tree shape, preorder, 0 = internal node, 1 = leaf, zero padded | 0xFF
    | leaf symbols, preorder, UTF-8 | 0xFF
    | payload, the codes of all symbols, zero padded
```

Codes are paths from the root to a leaf, 0 is left and 1 is right. Trees of fewer than three
distinct symbols get an additional leaf `\u{ff}` next to the root, so even a single symbol is
encoded with one bit.

```no_run
let report = huffpack::compress("notes.txt")?;
println!("{} -> {:?}", report.total_symbols, report.output_path);
let report = huffpack::decompress(&report.output_path)?;
println!("restored {:?}", report.output_path);
# Ok::<(), huffpack::HuffError>(())
```

*/

use common::count_symbols;
use common::count_symbols_limited;
use common::utf8::Utf8Symbols;
use common::FrequencyTable;
use common::Result;
use common::MAX_SYMBOL_COUNT;
use hufflpuff::build_tree;
use hufflpuff::Tree;
use log::*;
use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;
use tempfile::NamedTempFile;

pub use crate::compress::compress_to;
pub use crate::decompress::decompress_to;
pub use crate::dump::dump_to;
pub use crate::table::CodeTableReport;
pub use common::HuffError;

pub mod compress;
pub mod decompress;
pub mod dump;
pub mod table;

/// First byte of every container
pub const MAGIC: u8 = b'H';

/// Appended to the source path to name the container
pub const COMPRESSED_SUFFIX: &str = ".hfm";

/// Replaces `COMPRESSED_SUFFIX` to name the restored text
pub const DECOMPRESSED_SUFFIX: &str = "-decompressed.txt";

#[derive(Debug)]
pub struct CompressReport {
    pub output_path: PathBuf,
    pub total_symbols: u32,
    pub distinct_symbols: usize,
    pub source_bytes: u64,
    pub output_bytes: u64,
    pub elapsed: Duration,
    pub code_table: CodeTableReport,
}

impl CompressReport {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// output size relative to the source size
    pub fn ratio(&self) -> f64 {
        if self.source_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.source_bytes as f64
    }
}

#[derive(Debug)]
pub struct DecompressReport {
    pub output_path: PathBuf,
    pub total_symbols: u32,
    pub source_bytes: u64,
    pub output_bytes: u64,
    pub elapsed: Duration,
}

impl DecompressReport {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Compresses the text file at `source_path` into `source_path` + `COMPRESSED_SUFFIX`.
///
/// The output file only appears once it is complete, on failure nothing is written.
pub fn compress<P: AsRef<Path>>(source_path: P) -> Result<CompressReport> {
    compress_with_limit(source_path, MAX_SYMBOL_COUNT)
}

/// Like `compress`, but fails with `Oversize` if the source holds more than `limit` symbols.
///
/// The source is fully counted before the output is created.
pub fn compress_with_limit<P: AsRef<Path>>(source_path: P, limit: u32) -> Result<CompressReport> {
    let start = Instant::now();
    let source_path = source_path.as_ref();
    let counts = count_file(source_path, limit)?;

    let output_path = compressed_path(source_path);
    let source = Utf8Symbols::new(BufReader::new(File::open(source_path)?));
    let table = write_atomic(&output_path, |out| compress_to(&counts, source, out))?;

    let report = CompressReport {
        total_symbols: counts.total(),
        distinct_symbols: counts.num_symbols(),
        source_bytes: fs::metadata(source_path)?.len(),
        output_bytes: fs::metadata(&output_path)?.len(),
        elapsed: start.elapsed(),
        code_table: CodeTableReport::new(&counts, &table),
        output_path,
    };
    info!(
        "compressed {:?} to {:?}: {} symbols, {} -> {} bytes in {}ms",
        source_path,
        report.output_path,
        report.total_symbols,
        report.source_bytes,
        report.output_bytes,
        report.elapsed_millis()
    );
    Ok(report)
}

/// Restores the text of the container at `source_path`, see `decompressed_path` for the name of
/// the output file.
pub fn decompress<P: AsRef<Path>>(source_path: P) -> Result<DecompressReport> {
    let start = Instant::now();
    let source_path = source_path.as_ref();
    let output_path = decompressed_path(source_path);

    let mut input = BufReader::new(File::open(source_path)?);
    let total_symbols = write_atomic(&output_path, |out| decompress_to(&mut input, out))?;

    let report = DecompressReport {
        total_symbols,
        source_bytes: fs::metadata(source_path)?.len(),
        output_bytes: fs::metadata(&output_path)?.len(),
        elapsed: start.elapsed(),
        output_path,
    };
    info!(
        "decompressed {:?} to {:?}: {} symbols in {}ms",
        source_path,
        report.output_path,
        report.total_symbols,
        report.elapsed_millis()
    );
    Ok(report)
}

/// Compresses UTF-8 text held in memory into a container.
pub fn compress_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let counts = count_symbols(Utf8Symbols::new(input))?;
    let mut out = vec![];
    compress_to(&counts, Utf8Symbols::new(input), &mut out)?;
    Ok(out)
}

/// Restores the UTF-8 text of a container held in memory.
pub fn decompress_bytes(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = vec![];
    decompress_to(&mut &input[..], &mut out)?;
    Ok(out)
}

/// The huffman tree of a file: read from the header of a container (by its
/// `COMPRESSED_SUFFIX`), built from the symbol counts otherwise.
pub fn file_tree<P: AsRef<Path>>(path: P) -> Result<Tree> {
    let path = path.as_ref();
    if has_compressed_suffix(path) {
        let mut input = BufReader::new(File::open(path)?);
        return Ok(decompress::read_header(&mut input)?.tree);
    }
    build_tree(&count_file(path, MAX_SYMBOL_COUNT)?)
}

/// Writes a readable listing of the container at `path` to `out`, see `dump_to`.
pub fn dump<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<()> {
    let mut input = BufReader::new(File::open(path.as_ref())?);
    dump_to(&mut input, out)?;
    Ok(())
}

pub fn compressed_path(source_path: &Path) -> PathBuf {
    let mut name = source_path.as_os_str().to_owned();
    name.push(COMPRESSED_SUFFIX);
    PathBuf::from(name)
}

/// `notes.txt.hfm` becomes `notes.txt-decompressed.txt`, a name without `COMPRESSED_SUFFIX`
/// gets `DECOMPRESSED_SUFFIX` appended.
pub fn decompressed_path(source_path: &Path) -> PathBuf {
    let mut name = match source_path
        .to_str()
        .and_then(|name| name.strip_suffix(COMPRESSED_SUFFIX))
    {
        Some(stem) => OsString::from(stem),
        None => source_path.as_os_str().to_owned(),
    };
    name.push(DECOMPRESSED_SUFFIX);
    PathBuf::from(name)
}

fn has_compressed_suffix(path: &Path) -> bool {
    path.to_str()
        .map_or(false, |name| name.ends_with(COMPRESSED_SUFFIX))
}

fn count_file(path: &Path, limit: u32) -> Result<FrequencyTable> {
    let input = BufReader::new(File::open(path)?);
    count_symbols_limited(Utf8Symbols::new(input), limit)
}

/// Runs `write` against a temporary file next to `path`, which replaces `path` only if `write`
/// succeeds. The temporary file is removed on error.
fn write_atomic<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<T>,
{
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    let res = {
        let mut out = BufWriter::new(&mut tmp);
        let res = write(&mut out)?;
        out.flush()?;
        res
    };
    tmp.persist(path).map_err(io::Error::from)?;
    Ok(res)
}
