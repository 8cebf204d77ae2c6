//! Index containers for the tree model.
//!
//! Two parallel maps keyed by `NodeKey`: the content index holds each node's
//! attribute bag, the relation index holds parent/children links plus the
//! selection state. The engine keeps them consistent under every mutation;
//! the virtual root lives in the relation index only.

use std::collections::HashMap;
use trellis_core::{Attributes, NodeKey, SelectionState};

/// Structural and state data for one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationEntry {
    /// Parent key; `None` only for the virtual root.
    pub parent: Option<NodeKey>,
    /// Child keys in sibling order.
    pub children: Vec<NodeKey>,
    /// Tri-state selection.
    pub state: SelectionState,
}

impl RelationEntry {
    /// Entry for a node linked under `parent`, with no children yet.
    pub fn under(parent: NodeKey) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// Entry for the virtual root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Content index: `NodeKey` -> attribute bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentIndex {
    entries: HashMap<NodeKey, Attributes>,
}

impl ContentIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the attribute bag for a key.
    pub fn insert(&mut self, key: NodeKey, attrs: Attributes) {
        self.entries.insert(key, attrs);
    }

    /// Remove and return the attribute bag for a key.
    pub fn remove(&mut self, key: &NodeKey) -> Option<Attributes> {
        self.entries.remove(key)
    }

    /// Get the attribute bag for a key.
    pub fn get(&self, key: &NodeKey) -> Option<&Attributes> {
        self.entries.get(key)
    }

    /// Returns true if the key is indexed.
    pub fn contains(&self, key: &NodeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no node is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeKey, &Attributes)> {
        self.entries.iter()
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &NodeKey> {
        self.entries.keys()
    }

    /// Move every entry of `other` into this index.
    pub(crate) fn absorb(&mut self, other: ContentIndex) {
        self.entries.extend(other.entries);
    }
}

/// Relation index: `NodeKey` -> parent/children links and selection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationIndex {
    entries: HashMap<NodeKey, RelationEntry>,
}

impl RelationIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the relation entry for a key.
    pub fn insert(&mut self, key: NodeKey, entry: RelationEntry) {
        self.entries.insert(key, entry);
    }

    /// Remove and return the relation entry for a key.
    pub fn remove(&mut self, key: &NodeKey) -> Option<RelationEntry> {
        self.entries.remove(key)
    }

    /// Get the relation entry for a key.
    pub fn get(&self, key: &NodeKey) -> Option<&RelationEntry> {
        self.entries.get(key)
    }

    /// Get a mutable relation entry for a key.
    pub(crate) fn get_mut(&mut self, key: &NodeKey) -> Option<&mut RelationEntry> {
        self.entries.get_mut(key)
    }

    /// Get the entry for a key, creating a detached placeholder if absent.
    ///
    /// A placeholder has no parent until the builder resolves or
    /// finalizes it; outside the builder every real node carries one.
    pub(crate) fn ensure(&mut self, key: NodeKey) -> &mut RelationEntry {
        self.entries.entry(key).or_default()
    }

    /// Returns true if the key is indexed.
    pub fn contains(&self, key: &NodeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries, virtual root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry exists.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeKey, &RelationEntry)> {
        self.entries.iter()
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &NodeKey> {
        self.entries.keys()
    }

    /// Append `child` to `parent`'s child list.
    pub(crate) fn link_child(&mut self, parent: &NodeKey, child: NodeKey) {
        if let Some(entry) = self.entries.get_mut(parent) {
            entry.children.push(child);
        }
    }

    /// Remove `child` from `parent`'s child list.
    pub(crate) fn unlink_child(&mut self, parent: &NodeKey, child: &NodeKey) {
        if let Some(entry) = self.entries.get_mut(parent) {
            entry.children.retain(|c| c != child);
        }
    }

    /// Iterate mutably over all entries.
    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut RelationEntry> {
        self.entries.values_mut()
    }

    /// Move every entry of `other` into this index.
    pub(crate) fn absorb(&mut self, other: RelationIndex) {
        self.entries.extend(other.entries);
    }
}
