use super::tree_node::Node;
use common::FrequencyTable;
use common::PADDING_SYMBOL;

/// An owned huffman tree.
///
/// All walks over the tree use an explicit stack, trees read from a corrupt file can be
/// arbitrarily deep. For the same reason `Debug` only shows the leaf count and the depth.
#[derive(PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Tree { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn num_leaves(&self) -> usize {
        let mut num_leaves = 0;
        self.walk_tree(&mut |node, _transitions, _depth| {
            if node.is_leaf() {
                num_leaves += 1;
            }
        });
        num_leaves
    }

    /// the number of bits of the longest code
    pub fn get_depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(&mut |_node, _transitions, depth| {
            max_depth = max_depth.max(depth);
        });
        max_depth
    }

    /// returns estimated payload size in bytes for a source with `counts`
    pub fn estimate_compressed_size(&self, counts: &FrequencyTable) -> usize {
        let mut size_in_bits = 0;
        let mut seen_padding = false;
        self.walk_tree(&mut |node, _transitions, depth| {
            if let Some(symbol) = node.symbol() {
                // the padding leaf may share the symbol of a real leaf, which comes first
                if symbol == PADDING_SYMBOL {
                    if seen_padding {
                        return;
                    }
                    seen_padding = true;
                }
                size_in_bits += counts.get(symbol) as usize * depth;
            }
        });
        (size_in_bits + 7) / 8
    }

    /// Visits every node in preorder, left before right.
    ///
    /// `fun` receives the node, the path to it as bits (0 left, 1 right, the root step is the
    /// highest bit) and its depth. Only the lowest 64 steps of a path are kept.
    pub fn walk_tree<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node, u64, usize),
    {
        let mut stack = vec![(&self.root, 0_u64, 0_usize)];
        while let Some((node, transitions, depth)) = stack.pop() {
            fun(node, transitions, depth);
            if let Node::Internal { left, right } = node {
                stack.push((&**right, (transitions << 1) | 1, depth + 1));
                stack.push((&**left, transitions << 1, depth + 1));
            }
        }
    }

    /// Rebuilds a tree from its preorder shape (`true` is a leaf) and the symbols of its leaves.
    ///
    /// Returns `None` unless `shape` describes exactly one complete tree with one symbol per
    /// leaf.
    pub fn from_preorder(shape: &[bool], symbols: &[char]) -> Option<Tree> {
        // internal nodes waiting for children, holding the left child once it is complete
        let mut open: Vec<Option<Node>> = vec![];
        let mut symbols = symbols.iter();
        let mut root: Option<Tree> = None;

        for is_leaf in shape {
            if root.is_some() {
                // bits after the complete tree
                return None;
            }
            if !is_leaf {
                open.push(None);
                continue;
            }
            let symbol = match symbols.next() {
                Some(symbol) => *symbol,
                None => {
                    dismantle(open);
                    return None;
                }
            };
            let mut node = Node::leaf(symbol);
            // attach the completed subtree, completing parents on the way up
            loop {
                match open.pop() {
                    None => {
                        root = Some(Tree::new(node));
                        break;
                    }
                    Some(None) => {
                        open.push(Some(node));
                        break;
                    }
                    Some(Some(left)) => node = Node::internal(left, node),
                }
            }
        }
        if root.is_none() || symbols.next().is_some() {
            dismantle(open);
            return None;
        }
        root
    }
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (leaves, depth) = self.root.leaves_and_depth();
        f.debug_struct("Tree")
            .field("leaves", &leaves)
            .field("depth", &depth)
            .finish()
    }
}

/// drops the subtrees of a rejected shape without recursion
fn dismantle(open: Vec<Option<Node>>) {
    for node in open.into_iter().flatten() {
        drop(Tree::new(node));
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        let root = std::mem::replace(&mut self.root, Node::leaf(PADDING_SYMBOL));
        let mut stack = vec![root];
        // children are moved out before their parent is dropped, so dropping never recurses
        while let Some(node) = stack.pop() {
            if let Node::Internal { left, right } = node {
                stack.push(*left);
                stack.push(*right);
            }
        }
    }
}
