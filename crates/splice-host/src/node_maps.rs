//! Correspondence between stable node ids and Tree-sitter nodes.
//!
//! Tree-sitter nodes borrow their tree and their ids are opaque. Rules that
//! want to keep a handle on a node, or compare nodes from different passes,
//! use a [`NodeId`]: the pre-order index of a named node. [`NodeMaps`]
//! translates in both directions.

use std::collections::HashMap;
use std::ops::Range;

use crate::walk;

/// Pre-order index of a named node in the host tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw pre-order index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What the maps remember about one named node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEntry {
    kind: &'static str,
    byte_range: Range<usize>,
    tree_id: usize,
    parent: Option<NodeId>,
}

impl NodeEntry {
    /// Returns the node kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the byte range of the node.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_range.clone()
    }

    /// Returns the Tree-sitter node id.
    #[must_use]
    pub const fn tree_id(&self) -> usize {
        self.tree_id
    }

    /// Returns the nearest named ancestor.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Bidirectional maps between [`NodeId`]s and Tree-sitter nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMaps {
    entries: Vec<NodeEntry>,
    by_tree_id: HashMap<usize, NodeId>,
}

impl NodeMaps {
    pub(crate) fn build(root: tree_sitter::Node<'_>) -> Self {
        let mut maps = Self::default();
        walk::preorder(root, None, |node, parent| Some(maps.record(node, parent)));
        maps
    }

    /// Records `node` if it is named and returns the parent for its
    /// children.
    fn record(&mut self, node: tree_sitter::Node<'_>, parent: Option<NodeId>) -> Option<NodeId> {
        if !node.is_named() {
            return parent;
        }
        let id = NodeId(self.entries.len());
        self.entries.push(NodeEntry {
            kind: node.kind(),
            byte_range: node.byte_range(),
            tree_id: node.id(),
            parent,
        });
        self.by_tree_id.insert(node.id(), id);
        Some(id)
    }

    /// Returns the id assigned to a Tree-sitter node of the same tree.
    #[must_use]
    pub fn node_id(&self, node: tree_sitter::Node<'_>) -> Option<NodeId> {
        self.by_tree_id.get(&node.id()).copied()
    }

    /// Returns the entry for `id`.
    #[must_use]
    pub fn entry(&self, id: NodeId) -> Option<&NodeEntry> {
        self.entries.get(id.0)
    }

    /// Resolves `id` back to a Tree-sitter node of `tree`.
    ///
    /// `tree` must be the tree these maps were built from.
    #[must_use]
    pub fn resolve<'tree>(
        &self,
        tree: &'tree tree_sitter::Tree,
        id: NodeId,
    ) -> Option<tree_sitter::Node<'tree>> {
        let entry = self.entry(id)?;
        let range = entry.byte_range();
        let mut candidate = tree
            .root_node()
            .named_descendant_for_byte_range(range.start, range.end);
        while let Some(node) = candidate {
            if node.id() == entry.tree_id {
                return Some(node);
            }
            if node.byte_range() != range {
                return None;
            }
            candidate = node.parent();
        }
        None
    }

    /// Returns the innermost named node containing `offset`.
    #[must_use]
    pub fn innermost_at(&self, offset: usize) -> Option<NodeId> {
        self.entries
            .iter()
            .enumerate()
            .rev()
            .find(|(_, entry)| entry.byte_range.start <= offset && offset < entry.byte_range.end)
            .map(|(index, _)| NodeId(index))
    }

    /// Returns the number of named nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no nodes were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(id, entry)` pairs in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (NodeId(index), entry))
    }
}
