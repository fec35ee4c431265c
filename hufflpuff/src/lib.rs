/*!

Huffman trees over unicode scalar values.

`build_tree` turns a `FrequencyTable` into a `Tree`, `tree_to_table` derives the prefix code of
every symbol. `encode_symbols` and `decode_symbols` translate between symbols and the packed
payload bits.

*/

pub mod compress;
pub mod decompress;
pub mod min_heap;
pub mod table;
pub mod tree;

pub use crate::compress::encode_symbols;
pub use crate::decompress::decode_symbols;
pub use crate::table::CodeTable;
pub use crate::tree::build_tree;
pub use crate::tree::tree_to_table;
pub use crate::tree::Code;
pub use crate::tree::Node;
pub use crate::tree::Tree;

/// Trees of fewer distinct symbols get an additional padding leaf next to the root.
pub const MIN_SYMBOLS_WITHOUT_PADDING: usize = 3;
