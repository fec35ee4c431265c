use common::FrequencyTable;
use common::HuffError;
use common::Result;
use common::PADDING_SYMBOL;
use log::debug;
use log::log_enabled;
use log::trace;
use log::Level::Trace;

use crate::min_heap::MinHeap;
use crate::table::CodeTable;
use crate::tree::minimum_tree_depth;
use crate::tree::tree_node::WeightedNode;
use crate::tree::Code;
use crate::tree::Tree;
use crate::MIN_SYMBOLS_WITHOUT_PADDING;

/// creates a huffman tree from the symbol counts
///
/// Leaves enter the heap by descending count, ties by ascending symbol. The two lightest
/// nodes are merged until one node is left, the node extracted first becomes the left child.
///
/// With fewer than `MIN_SYMBOLS_WITHOUT_PADDING` distinct symbols the root is paired with a
/// zero count `PADDING_SYMBOL` leaf, so every real symbol gets a code of at least one bit.
pub fn build_tree(counts: &FrequencyTable) -> Result<Tree> {
    if counts.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let mut heap = MinHeap::new();
    for (symbol, count) in counts.sorted_by_count() {
        heap.insert(WeightedNode::leaf(symbol, count));
    }

    let mut root = None;
    while let (Some(node1), node2) = (heap.extract_min(), heap.extract_min()) {
        if let Some(node2) = node2 {
            heap.insert(WeightedNode::merge(node1, node2));
        } else {
            // last node, which will be the root node
            root = Some(node1);
        }
    }
    let mut root = root.ok_or(HuffError::EmptyInput)?;

    if counts.num_symbols() < MIN_SYMBOLS_WITHOUT_PADDING {
        debug!(
            "only {} distinct symbols, adding padding leaf",
            counts.num_symbols()
        );
        root = WeightedNode::merge(root, WeightedNode::leaf(PADDING_SYMBOL, 0));
    }

    let tree = Tree::new(root.node);
    debug_assert!(tree.get_depth() >= minimum_tree_depth(tree.num_leaves()));
    debug!(
        "built tree with {} leaves and depth {}",
        tree.num_leaves(),
        tree.get_depth()
    );
    Ok(tree)
}

/// converts the tree into a table with the prefix code of each symbol
///
/// If a symbol sits on more than one leaf, which only happens for `PADDING_SYMBOL`, the first
/// leaf in preorder keeps its code.
pub fn tree_to_table(tree: &Tree) -> CodeTable {
    let mut table = CodeTable::new();
    tree.walk_tree(&mut |node, transitions, depth| {
        if let Some(symbol) = node.symbol() {
            debug_assert!(depth <= 64);
            table.insert_first(symbol, Code::new(transitions, depth as u8));
        }
    });

    if log_enabled!(Trace) {
        for (symbol, code) in table.iter() {
            trace!("{:?} => {}", symbol, code);
        }
    }
    table
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// This validation is rather slow and should not be used in a regular compression execution.
pub fn test_prefix_property(table: &CodeTable) {
    if let Some((code, other)) = table.find_prefix_violation() {
        panic!("invalid prefix detected between {:?} and {:?}", code, other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use common::count_str;

    #[test]
    fn test_abracadabra_codes() {
        let counts = count_str("abracadabra").unwrap();
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.num_leaves(), 5);
        assert_eq!(tree.get_depth(), 4);

        let table = tree_to_table(&tree);
        assert_eq!(table.get('a'), Some(Code::new(0b0, 1)));
        assert_eq!(table.get('r'), Some(Code::new(0b10, 2)));
        assert_eq!(table.get('b'), Some(Code::new(0b110, 3)));
        assert_eq!(table.get('c'), Some(Code::new(0b1110, 4)));
        assert_eq!(table.get('d'), Some(Code::new(0b1111, 4)));
        test_prefix_property(&table);
    }

    #[test]
    fn test_single_symbol_gets_padding_leaf() {
        let counts = count_str("aaaa").unwrap();
        let tree = build_tree(&counts).unwrap();
        assert_eq!(
            tree.root(),
            &Node::internal(Node::leaf('a'), Node::leaf(PADDING_SYMBOL))
        );

        let table = tree_to_table(&tree);
        assert_eq!(table.get('a'), Some(Code::new(0b0, 1)));
    }

    #[test]
    fn test_two_symbols_get_padding_leaf() {
        let counts = count_str("ab").unwrap();
        let tree = build_tree(&counts).unwrap();
        assert_eq!(
            tree.root(),
            &Node::internal(
                Node::internal(Node::leaf('a'), Node::leaf('b')),
                Node::leaf(PADDING_SYMBOL)
            )
        );

        let table = tree_to_table(&tree);
        assert_eq!(table.get('a'), Some(Code::new(0b00, 2)));
        assert_eq!(table.get('b'), Some(Code::new(0b01, 2)));
        test_prefix_property(&table);
    }

    #[test]
    fn test_three_symbols_no_padding() {
        let counts = count_str("abc").unwrap();
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.num_leaves(), 3);
        let table = tree_to_table(&tree);
        assert_eq!(table.get(PADDING_SYMBOL), None);
    }

    #[test]
    fn test_padding_symbol_in_source_keeps_first_leaf() {
        let text = "\u{ff}\u{ff}\u{ff}";
        let counts = count_str(text).unwrap();
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.num_leaves(), 2);

        let table = tree_to_table(&tree);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(PADDING_SYMBOL), Some(Code::new(0b0, 1)));
    }

    #[test]
    fn test_empty_counts() {
        let counts = FrequencyTable::new();
        assert!(matches!(build_tree(&counts), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn test_depth_is_at_least_minimum() {
        let text: String = ('a'..='z').collect();
        let counts = count_str(&text).unwrap();
        let tree = build_tree(&counts).unwrap();
        assert!(tree.get_depth() >= minimum_tree_depth(26));
        assert_eq!(tree.get_depth(), 5);
        test_prefix_property(&tree_to_table(&tree));
    }

    #[test]
    #[should_panic(expected = "invalid prefix")]
    fn test_prefix_property_detects_violation() {
        let mut table = CodeTable::new();
        table.insert_first('a', Code::new(0b1, 1));
        table.insert_first('b', Code::new(0b10, 2));
        test_prefix_property(&table);
    }
}
