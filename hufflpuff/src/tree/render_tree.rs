use crate::tree::Node;
use crate::tree::Tree;
use std::borrow::Cow;
use std::io;

#[derive(Debug, Clone)]
pub struct Edge {
    from: usize,
    to: usize,
    transition: u8, // 0 or 1
}

/// A flattened copy of a tree, nodes are numbered in preorder.
#[derive(Debug)]
pub struct TreeGraph {
    symbols: Vec<Option<char>>,
    edges: Vec<Edge>,
}

impl TreeGraph {
    pub fn new(tree: &Tree) -> Self {
        let mut symbols = vec![];
        let mut edges = vec![];
        // (node, position of its parent, transition from the parent)
        let mut stack: Vec<(&Node, Option<usize>, u8)> = vec![(tree.root(), None, 0)];
        while let Some((node, parent, transition)) = stack.pop() {
            let pos = symbols.len();
            symbols.push(node.symbol());
            if let Some(from) = parent {
                edges.push(Edge {
                    from,
                    to: pos,
                    transition,
                });
            }
            if let Node::Internal { left, right } = node {
                stack.push((&**right, Some(pos), 1));
                stack.push((&**left, Some(pos), 0));
            }
        }
        TreeGraph { symbols, edges }
    }
}

pub fn render_tree_to<W: io::Write>(tree: &Tree, output: &mut W) -> io::Result<()> {
    dot::render(&TreeGraph::new(tree), output)
}

impl<'a> dot::Labeller<'a, usize, Edge> for TreeGraph {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").expect("graph id is a valid identifier")
    }

    fn node_id(&'a self, n: &usize) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).expect("node ids are alphanumeric")
    }

    fn node_label(&'a self, n: &usize) -> dot::LabelText<'a> {
        let out = match self.symbols[*n] {
            Some(symbol) => format!("{:?}", symbol),
            None => String::new(),
        };
        dot::LabelText::LabelStr(out.into())
    }

    fn node_shape(&'a self, n: &usize) -> Option<dot::LabelText<'a>> {
        if self.symbols[*n].is_some() {
            Some(dot::LabelText::LabelStr("box".into()))
        } else {
            Some(dot::LabelText::LabelStr("circle".into()))
        }
    }

    fn edge_label(&'a self, ed: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a, usize, Edge> for TreeGraph {
    fn nodes(&'a self) -> dot::Nodes<'a, usize> {
        Cow::Owned((0..self.symbols.len()).collect())
    }

    fn edges(&'a self) -> dot::Edges<'a, Edge> {
        Cow::Borrowed(&self.edges[..])
    }

    fn source(&'a self, e: &Edge) -> usize {
        e.from
    }

    fn target(&'a self, e: &Edge) -> usize {
        e.to
    }
}

impl core::fmt::Display for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut out = vec![];
        render_tree_to(self, &mut out).map_err(|_| core::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&out))
    }
}
