//! The tree engine: owns the index pair and every operation on it.

use crate::builder::{build_index, BuiltIndex};
use crate::index::{ContentIndex, RelationEntry, RelationIndex};
use trellis_core::{Attributes, KeyMap, NodeKey, SelectionState};

/// Control decision returned by a traversal visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Continue into the node's children.
    Descend,
    /// Skip the node's children; the walk continues with pending subtrees.
    Skip,
}

/// An indexed tree model with tri-state selection.
///
/// The tree exclusively owns a content index (per-node attribute bags) and
/// a relation index (parent/children links plus selection state) and keeps
/// the two consistent under every load, selection change and structural
/// edit. Consumers that hold borrowed entries must treat them as read-only
/// and mutate through the tree's operations.
#[derive(Debug, Default)]
pub struct Tree {
    content: ContentIndex,
    relation: RelationIndex,
    keys: KeyMap,
}

impl Tree {
    /// Create an empty tree with the default field mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree reading ids, parent ids and child lists from
    /// the given field names.
    pub fn with_keys(keys: KeyMap) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// The field mapping in effect.
    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    // ==================== Loading ====================

    /// Replace the index with one built from `records`.
    ///
    /// Any previous index is discarded first. Loading an empty collection
    /// leaves just the virtual root.
    pub fn load(&mut self, records: Vec<Attributes>) {
        self.clear_index();
        let BuiltIndex {
            content, relation, ..
        } = build_index(records, &self.keys);
        self.content = content;
        self.relation = relation;
    }

    /// Build an index pair from `records` with this tree's field mapping,
    /// without touching the live index.
    pub fn build_index(&self, records: Vec<Attributes>) -> BuiltIndex {
        build_index(records, &self.keys)
    }

    /// Drop both indices. The virtual root reappears on the next load.
    pub fn clear_index(&mut self) {
        self.content.clear();
        self.relation.clear();
    }

    // ==================== Read access ====================

    /// The content index.
    pub fn content(&self) -> &ContentIndex {
        &self.content
    }

    /// The relation index.
    pub fn relation(&self) -> &RelationIndex {
        &self.relation
    }

    /// The attribute bag of a node.
    pub fn node(&self, key: &NodeKey) -> Option<&Attributes> {
        self.content.get(key)
    }

    /// The parent of a node; `None` for the virtual root and unknown keys.
    pub fn parent(&self, key: &NodeKey) -> Option<&NodeKey> {
        self.relation.get(key).and_then(|e| e.parent.as_ref())
    }

    /// The children of a node, in sibling order.
    pub fn children(&self, key: &NodeKey) -> Option<&[NodeKey]> {
        self.relation.get(key).map(|e| e.children.as_slice())
    }

    /// The selection state of a node.
    pub fn state(&self, key: &NodeKey) -> Option<SelectionState> {
        self.relation.get(key).map(|e| e.state)
    }

    /// Returns true if the key is indexed (the virtual root counts once a
    /// load has happened).
    pub fn contains(&self, key: &NodeKey) -> bool {
        self.relation.contains(key)
    }

    /// Number of real nodes, virtual root excluded.
    pub fn node_count(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the tree holds no real nodes.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    // ==================== Internal access ====================

    pub(crate) fn relation_mut(&mut self) -> &mut RelationIndex {
        &mut self.relation
    }

    pub(crate) fn content_mut(&mut self) -> &mut ContentIndex {
        &mut self.content
    }

    pub(crate) fn relation_entry_mut(&mut self, key: &NodeKey) -> Option<&mut RelationEntry> {
        self.relation.get_mut(key)
    }

    // ==================== Traversal ====================

    /// Pre-order depth-first walk from `start` (default: virtual root).
    ///
    /// The visitor receives the key, its relation entry, its content
    /// (`None` for the virtual root) and the depth relative to `start`.
    /// Returning [`Visit::Skip`] prunes the node's children; the walk then
    /// continues with the remaining subtrees. An unknown `start` visits
    /// nothing. Runs on an explicit stack, so tree depth does not consume
    /// call stack.
    pub fn traverse<F>(&self, start: Option<&NodeKey>, mut visitor: F)
    where
        F: FnMut(&NodeKey, &RelationEntry, Option<&Attributes>, usize) -> Visit,
    {
        let start = start.cloned().unwrap_or(NodeKey::Root);
        if !self.relation.contains(&start) {
            tracing::debug!(start = %start, "traverse: start key not indexed, nothing to visit");
            return;
        }
        let mut stack: Vec<(NodeKey, usize)> = vec![(start, 0)];
        while let Some((key, depth)) = stack.pop() {
            let Some(entry) = self.relation.get(&key) else {
                continue;
            };
            if visitor(&key, entry, self.content.get(&key), depth) == Visit::Skip {
                continue;
            }
            for child in entry.children.iter().rev() {
                stack.push((child.clone(), depth + 1));
            }
        }
    }
}
