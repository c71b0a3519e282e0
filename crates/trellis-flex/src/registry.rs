//! Item-to-node registry and the child-list reconciler

use taffy::NodeId;

use crate::error::Result;
use crate::item::{flex_node_of, LayoutItem};
use crate::tree::LayoutTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Position of the item in the controller's child sequence
    pub item: usize,
    pub node: NodeId,
}

/// Items of one controller that currently have a node in the flex tree, in
/// child order
#[derive(Debug, Default)]
pub struct NodeRegistry {
    entries: Vec<RegistryEntry>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn node_for(&self, item: usize) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|entry| entry.item == item)
            .map(|entry| entry.node)
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.entries.iter().any(|entry| entry.node == node)
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        self.entries.iter().map(|entry| entry.node).collect()
    }

    fn push(&mut self, item: usize, node: NodeId) {
        self.entries.push(RegistryEntry { item, node });
    }
}

/// Rebuild `target`'s child list from `children`.
///
/// Both `vacated` (when it differs from `target` and is still alive) and
/// `target` are emptied first, then every item carrying a flex modifier is
/// inserted in sequence order. Items without one are left out and do not
/// consume an index.
pub(crate) fn reconcile<I: LayoutItem>(
    tree: &mut LayoutTree,
    registry: &mut NodeRegistry,
    children: &[I],
    target: NodeId,
    vacated: Option<NodeId>,
) -> Result<()> {
    if let Some(from) = vacated.filter(|from| *from != target) {
        if tree.is_initialized(from) {
            tree.remove_all_children(from)?;
        }
    }
    tree.remove_all_children(target)?;
    registry.clear();

    let mut index = 0;
    for (position, child) in children.iter().enumerate() {
        let Some(node) = flex_node_of(child) else {
            continue;
        };
        if node == target {
            tracing::warn!(node = ?node, position, "item node is the container node, skipping");
            continue;
        }
        if registry.contains_node(node) {
            tracing::warn!(node = ?node, position, "node already placed in this container, skipping");
            continue;
        }
        tree.insert_child(target, node, index)?;
        registry.push(position, node);
        index += 1;
    }

    tracing::trace!(
        container = ?target,
        items = children.len(),
        placed = registry.len(),
        "reconciled children"
    );
    Ok(())
}
