//! The node tree built from a token stream and re-rendered as text.
//!
//! Nodes live in an arena owned by [`Document`] and refer to each other by
//! [`NodeId`], so the tree can be walked and inspected after construction
//! without parent back-references.

mod builder;
mod serializer;

use std::fmt::{self, Display, Write};
use std::ops::Index;

pub use self::builder::build;
pub use self::serializer::serialize;

/// Index of a node within its [`Document`] arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

/// A node's name: a real element name or one of the structural sentinels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeName {
    Root,
    Data,
    Comment,
    Element(String),
}

impl Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeName::Root => f.write_str("<ROOT>"),
            NodeName::Data => f.write_str("<DATA>"),
            NodeName::Comment => f.write_str("<COMMENT>"),
            NodeName::Element(name) => f.write_str(name),
        }
    }
}

/// An attribute pair. An empty value means a boolean attribute: the
/// serializer renders it as the bare name. Names are recorded in source
/// order and never deduplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub name: NodeName,
    pub attrs: Vec<Attribute>,
    /// Raw text; only meaningful for [`NodeName::Data`] and
    /// [`NodeName::Comment`] leaves.
    pub data: String,
    children: Vec<NodeId>,
}

impl Node {
    fn new(name: NodeName, data: String) -> Self {
        Node {
            name,
            attrs: Vec::new(),
            data,
            children: Vec::new(),
        }
    }

    pub(crate) fn element(name: impl Into<String>) -> Self {
        Node::new(NodeName::Element(name.into()), String::new())
    }

    pub(crate) fn data(text: impl Into<String>) -> Self {
        Node::new(NodeName::Data, text.into())
    }

    pub(crate) fn comment(text: impl Into<String>) -> Self {
        Node::new(NodeName::Comment, text.into())
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An arena-backed node tree. The root always sits at [`Document::ROOT`]
/// and carries the [`NodeName::Root`] sentinel; every other node is
/// reachable from exactly one parent.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new() -> Self {
        Document {
            nodes: vec![Node::new(NodeName::Root, String::new())],
        }
    }

    /// Appends `node` as the last child of `parent` and returns its id.
    pub(crate) fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());

        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);

        id
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Renders an indented outline of the node shapes, for diagnostics and
    /// tests. Data is quoted on its own line below the owning node.
    #[must_use]
    pub fn debug_tree(&self, indent_width: usize) -> String {
        let mut out = format!("TAG {}:", self[Document::ROOT].name);

        self.debug_children(Document::ROOT, 1, indent_width, &mut out);

        out
    }

    fn debug_children(&self, id: NodeId, depth: usize, indent_width: usize, out: &mut String) {
        for &child_id in self[id].children() {
            let child = &self[child_id];
            let pad = " ".repeat(indent_width * depth);

            let _ = write!(out, "\n{pad}TAG {}", child.name);

            if !child.attrs.is_empty() {
                let rendered: Vec<_> = child
                    .attrs
                    .iter()
                    .map(|attr| {
                        if attr.value.is_empty() {
                            format!("\"{}\"", attr.name)
                        } else {
                            format!("\"{}={}\"", attr.name, attr.value)
                        }
                    })
                    .collect();

                let _ = write!(out, " ({})", rendered.join(", "));
            }

            if !child.data.is_empty() || !child.children().is_empty() {
                out.push(':');
            }

            if !child.data.is_empty() {
                let data_pad = " ".repeat(indent_width * (depth + 1));

                let _ = write!(out, "\n{data_pad}DATA \"{}\"", child.data);
            }

            self.debug_children(child_id, depth + 1, indent_width, out);
        }
    }
}

impl Index<NodeId> for Document {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
