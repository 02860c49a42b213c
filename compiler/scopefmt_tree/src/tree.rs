//! Syntax tree contract and in-memory tree.
//!
//! The printer never sees a concrete grammar. It is driven through
//! [`Tree::iterate`], which must call [`TreeVisitor::enter`] and
//! [`TreeVisitor::leave`] in properly nested order, parents before children
//! and siblings left to right.

use std::ops::Range;

use rustc_hash::FxHashMap;

use crate::error::TreeError;
use crate::input::Input;

/// View of one node during traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SyntaxNode<'a> {
    /// Node type name, e.g. `VariableDefinition` or `(`.
    pub name: &'a str,
    pub from: usize,
    pub to: usize,
}

impl<'a> SyntaxNode<'a> {
    #[inline]
    pub const fn new(name: &'a str, from: usize, to: usize) -> Self {
        SyntaxNode { name, from, to }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.to <= self.from
    }

    #[inline]
    pub const fn span(&self) -> Range<usize> {
        self.from..self.to
    }
}

/// Receives enter/leave events from [`Tree::iterate`].
pub trait TreeVisitor {
    type Error;

    fn enter(&mut self, node: SyntaxNode<'_>) -> Result<(), Self::Error>;

    fn leave(&mut self, node: SyntaxNode<'_>) -> Result<(), Self::Error>;
}

/// A syntax tree that can be walked in enter/leave order.
///
/// Traversal stops at the first visitor error and returns it.
pub trait Tree {
    fn iterate<V: TreeVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error>;
}

/// An external parser producing a [`Tree`] from source input.
pub trait SyntaxParser {
    type Tree: Tree;
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, input: &dyn Input) -> Result<Self::Tree, Self::Error>;
}

/// Index of a node in a [`SyntaxTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    /// Index into the interned name table.
    name: usize,
    from: usize,
    to: usize,
    children: Vec<NodeId>,
}

/// Arena-allocated syntax tree with interned node names.
///
/// Built through [`TreeBuilder`], which guarantees that spans are ordered:
/// every node satisfies `from <= to`, siblings do not overlap and children
/// lie within their parent.
#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    names: Vec<Box<str>>,
    nodes: Vec<NodeData>,
    roots: Vec<NodeId>,
}

impl SyntaxTree {
    pub fn builder() -> TreeBuilder {
        TreeBuilder::default()
    }

    /// View of a node. `id` must come from this tree.
    pub fn node(&self, id: NodeId) -> SyntaxNode<'_> {
        let data = &self.nodes[id.0];
        SyntaxNode::new(&self.names[data.name], data.from, data.to)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Tree for SyntaxTree {
    fn iterate<V: TreeVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        // (node, index of the next child to visit)
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        for &root in &self.roots {
            visitor.enter(self.node(root))?;
            stack.push((root, 0));
            while let Some(top) = stack.last_mut() {
                let (id, next) = *top;
                if let Some(&child) = self.nodes[id.0].children.get(next) {
                    top.1 += 1;
                    visitor.enter(self.node(child))?;
                    stack.push((child, 0));
                } else {
                    stack.pop();
                    visitor.leave(self.node(id))?;
                }
            }
        }
        Ok(())
    }
}

/// Incremental builder for [`SyntaxTree`].
///
/// Containers are opened with their start offset and closed with their end
/// offset; tokens are added as leaves. Nodes must be added in source order.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    names: Vec<Box<str>>,
    name_ids: FxHashMap<Box<str>, usize>,
    nodes: Vec<NodeData>,
    roots: Vec<NodeId>,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a container node at `from`.
    pub fn open(&mut self, name: &str, from: usize) -> Result<NodeId, TreeError> {
        let id = self.attach(name, from, from)?;
        self.open.push(id);
        Ok(id)
    }

    /// Finish the innermost open container at `to`.
    pub fn close(&mut self, to: usize) -> Result<NodeId, TreeError> {
        let id = self.open.pop().ok_or(TreeError::NothingOpen)?;
        let data = &self.nodes[id.0];
        let name = &self.names[data.name];
        if to < data.from {
            return Err(TreeError::Reversed {
                name: name.to_string(),
                from: data.from,
                to,
            });
        }
        if let Some(last) = data.children.last() {
            let child_end = self.nodes[last.0].to;
            if to < child_end {
                return Err(TreeError::ChildOutside {
                    name: name.to_string(),
                    to,
                    child_end,
                });
            }
        }
        self.nodes[id.0].to = to;
        Ok(id)
    }

    /// Add a node without children.
    pub fn leaf(&mut self, name: &str, from: usize, to: usize) -> Result<NodeId, TreeError> {
        if to < from {
            return Err(TreeError::Reversed {
                name: name.to_owned(),
                from,
                to,
            });
        }
        self.attach(name, from, to)
    }

    /// Number of containers still open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn finish(self) -> Result<SyntaxTree, TreeError> {
        if let Some(&id) = self.open.first() {
            return Err(TreeError::Unclosed {
                name: self.names[self.nodes[id.0].name].to_string(),
            });
        }
        Ok(SyntaxTree {
            names: self.names,
            nodes: self.nodes,
            roots: self.roots,
        })
    }

    fn attach(&mut self, name: &str, from: usize, to: usize) -> Result<NodeId, TreeError> {
        let previous_end = self.previous_end();
        if from < previous_end {
            return Err(TreeError::OutOfOrder {
                name: name.to_owned(),
                from,
                previous_end,
            });
        }

        let id = NodeId(self.nodes.len());
        let name = self.intern(name);
        self.nodes.push(NodeData {
            name,
            from,
            to,
            children: Vec::new(),
        });
        match self.open.last() {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    /// Earliest offset the next node at the current level may start at.
    fn previous_end(&self) -> usize {
        let siblings = match self.open.last() {
            Some(parent) => &self.nodes[parent.0].children,
            None => &self.roots,
        };
        match (siblings.last(), self.open.last()) {
            (Some(sibling), _) => self.nodes[sibling.0].to,
            (None, Some(parent)) => self.nodes[parent.0].from,
            (None, None) => 0,
        }
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.name_ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.into());
        self.name_ids.insert(name.into(), id);
        id
    }
}
