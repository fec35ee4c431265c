use crate::min_heap::Weighted;

/// A node of the huffman tree. Every internal node has exactly two children.
///
/// Comparing and formatting never recurse, `Debug` prints a subtree as its leaf count and depth.
pub enum Node {
    Internal { left: Box<Node>, right: Box<Node> },
    Leaf { symbol: char },
}

impl Node {
    #[inline]
    pub fn leaf(symbol: char) -> Self {
        Node::Leaf { symbol }
    }

    #[inline]
    pub fn internal(left: Node, right: Node) -> Self {
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    #[inline]
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// the child reached by `bit`, `false` is left. A leaf has no children.
    #[inline]
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Internal { left, right } => Some(if bit { right } else { left }),
            Node::Leaf { .. } => None,
        }
    }

    /// number of leaves and the depth of the deepest leaf below `self`
    pub(crate) fn leaves_and_depth(&self) -> (usize, usize) {
        let mut num_leaves = 0;
        let mut max_depth = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Internal { left, right } => {
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
                Node::Leaf { .. } => {
                    num_leaves += 1;
                    max_depth = max_depth.max(depth);
                }
            }
        }
        (num_leaves, max_depth)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Node::Leaf { symbol }, Node::Leaf { symbol: other }) if symbol == other => {}
                (
                    Node::Internal { left, right },
                    Node::Internal {
                        left: other_left,
                        right: other_right,
                    },
                ) => {
                    stack.push((&**right, &**other_right));
                    stack.push((&**left, &**other_left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Node {}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Node::Leaf { symbol } => write!(f, "Leaf({:?})", symbol),
            Node::Internal { .. } => {
                let (leaves, depth) = self.leaves_and_depth();
                write!(f, "Internal {{ leaves: {}, depth: {} }}", leaves, depth)
            }
        }
    }
}

/// A node with the number of occurences of its subtree. Only lives while the tree is built.
#[derive(Debug)]
pub(crate) struct WeightedNode {
    pub(crate) count: u32,
    pub(crate) node: Node,
}

impl WeightedNode {
    pub(crate) fn leaf(symbol: char, count: u32) -> Self {
        WeightedNode {
            count,
            node: Node::leaf(symbol),
        }
    }

    /// `left` becomes the left child, it is the node extracted first
    pub(crate) fn merge(left: WeightedNode, right: WeightedNode) -> Self {
        WeightedNode {
            count: left.count + right.count,
            node: Node::internal(left.node, right.node),
        }
    }
}

impl Weighted for WeightedNode {
    #[inline]
    fn weight(&self) -> u32 {
        self.count
    }
}

/// The prefix code of a symbol, the path from the root to its leaf.
///
/// `val` holds the path in its lowest `number_bits` bits, the step taken at the root is the
/// highest of them. 0 is left, 1 is right.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pub(crate) val: u64,
    pub(crate) number_bits: u8,
}

impl Code {
    pub fn new(val: u64, number_bits: u8) -> Self {
        debug_assert!(number_bits as u32 <= u64::BITS);
        Code { val, number_bits }
    }

    #[inline]
    pub fn val(&self) -> u64 {
        self.val
    }

    #[inline]
    pub fn number_bits(&self) -> u8 {
        self.number_bits
    }

    /// true if `self` is a prefix of `other`, or equal to it
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.number_bits > other.number_bits {
            return false;
        }
        let bit_diff = other.number_bits - self.number_bits;
        other.val.checked_shr(bit_diff as u32).unwrap_or(0) == self.val
    }
}

impl core::fmt::Debug for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Code{{ val:{:#b} number_bits:{:?} }}",
            self.val, self.number_bits
        ))
    }
}

/// The bits as `0`/`1` characters, e.g. `0110`
impl core::fmt::Display for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for shift in (0..self.number_bits).rev() {
            let bit = (self.val >> shift) & 1;
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}
