pub mod build_tree;
pub mod render_tree;
mod tree;
pub(crate) mod tree_node;
pub use build_tree::build_tree;
pub use build_tree::tree_to_table;

pub use tree::Tree;
pub use tree_node::Code;
pub use tree_node::Node;

/// Lower bound for the depth of a tree with `num_leaves` leaves.
///
/// A perfectly balanced tree of depth `d` holds `2^d` leaves, every tree has depth one or more.
#[inline]
pub fn minimum_tree_depth(num_leaves: usize) -> usize {
    let mut depth = 1;
    while depth < usize::BITS as usize && (1_usize << depth) < num_leaves {
        depth += 1;
    }
    depth
}

#[test]
fn test_minimum_tree_depth() {
    let expected = [(0, 1), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (8, 3), (9, 4), (256, 8), (257, 9)];
    for (num_leaves, depth) in expected.iter() {
        assert_eq!(minimum_tree_depth(*num_leaves), *depth, "{} leaves", num_leaves);
    }
}
