use tower_lsp::lsp_types::{Range, SymbolKind};

/// Stable handle of a node inside an [`Outline`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// One entry of the document outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNode {
    pub name: String,
    pub detail: Option<String>,
    pub kind: SymbolKind,
    /// Full extent of the symbol.
    pub range: Range,
    /// Span of the symbol's name; where jumps land.
    pub selection_range: Range,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// 1-based position among siblings.
    pub index: usize,
    pub depth: usize,
}

impl SymbolNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-backed symbol tree.
///
/// Parent and child links are [`NodeId`]s into `nodes`, so the tree never
/// holds owning cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub(crate) nodes: Vec<SymbolNode>,
    pub(crate) roots: Vec<NodeId>,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(
        &self,
        id: NodeId,
    ) -> &SymbolNode {
        &self.nodes[id.0]
    }

    /// The level `id` lives on: its parent's children, or the roots.
    pub fn siblings(
        &self,
        id: NodeId,
    ) -> &[NodeId] {
        match self.node(id).parent {
            Some(parent) => &self.node(parent).children,
            None => &self.roots,
        }
    }

    /// Ancestors of `id`, nearest first. Does not include `id`.
    pub fn ancestors(
        &self,
        id: NodeId,
    ) -> Ancestors<'_> {
        Ancestors {
            outline: self,
            next: self.node(id).parent,
        }
    }

    /// Root-to-node chain ending at `id`.
    pub fn path(
        &self,
        id: NodeId,
    ) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.ancestors(id).collect();
        path.reverse();
        path.push(id);
        path
    }

    /// Top-level ancestor of `id` (or `id` itself at root level).
    pub fn root_of(
        &self,
        id: NodeId,
    ) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// Depth-first, sibling-order traversal: each node before its children.
    pub fn preorder(&self) -> Preorder<'_> {
        let mut stack = self.roots.clone();
        stack.reverse();
        Preorder {
            outline: self,
            stack,
        }
    }
}

pub struct Preorder<'a> {
    outline: &'a Outline,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        self.stack.extend(self.outline.node(current).children.iter().rev().copied());
        Some(current)
    }
}

pub struct Ancestors<'a> {
    outline: &'a Outline,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.outline.node(current).parent;
        Some(current)
    }
}
