//! Tri-state selection: propagation and selected-value queries.
//!
//! A direct state change cascades in both directions: every descendant is
//! forced to the resolved state, and every ancestor is re-derived from its
//! own children, level by level up to the virtual root. `Half` is never set
//! directly; it only appears when a node's children disagree, or when a
//! `Half` verdict is carried up from below.

use crate::tree::{Tree, Visit};
use trellis_core::{NodeKey, SelectionState};

/// Which checked nodes `get_value` reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueMode {
    /// Every checked node.
    #[default]
    All,
    /// Top-most checked nodes only; a fully checked subtree reports its
    /// root and nothing below it.
    OnlyParent,
    /// Checked leaves only.
    OnlyLeaf,
}

impl Tree {
    // ==================== Bulk state ====================

    /// Set every node, virtual root included, to `state` verbatim.
    ///
    /// All nodes agree afterwards, so no propagation is needed.
    pub fn set_all(&mut self, state: SelectionState) {
        for entry in self.relation_mut().values_mut() {
            entry.state = state;
        }
    }

    /// Replace the selection: everything unchecked, then `keys` checked
    /// with full propagation.
    pub fn set_selection(&mut self, keys: &[NodeKey]) {
        self.set_all(SelectionState::Unchecked);
        self.add_selection(keys);
    }

    /// Check each key on top of the current selection.
    ///
    /// Unknown keys are reported through the diagnostic channel and
    /// otherwise ignored.
    pub fn add_selection(&mut self, keys: &[NodeKey]) {
        for key in keys {
            self.update_status(key, SelectionState::Checked);
        }
    }

    // ==================== Single-node state ====================

    /// Set one node's state and propagate.
    ///
    /// The requested state collapses to checked/unchecked (`Half` is only
    /// ever derived). Descendants are forced to the resolved state;
    /// ancestors are re-derived from their own children one level at a
    /// time. Unknown keys are a no-op with a diagnostic.
    pub fn update_status(&mut self, key: &NodeKey, state: SelectionState) {
        let state = state.normalized();
        let Some(entry) = self.relation_entry_mut(key) else {
            tracing::warn!(key = %key, "update_status: key not indexed, ignoring");
            return;
        };
        entry.state = state;
        let parent = entry.parent.clone();
        self.force_descendants(key, state);
        self.reconcile_upward(parent, state);
    }

    /// True iff the node has children and they disagree: some child's
    /// state differs from the first child's.
    pub fn is_half(&self, key: &NodeKey) -> bool {
        let Some(children) = self.children(key) else {
            return false;
        };
        let Some(first) = children.first().and_then(|c| self.state(c)) else {
            return false;
        };
        children.iter().skip(1).any(|c| self.state(c) != Some(first))
    }

    // ==================== Value queries ====================

    /// Collect checked keys in pre-order, honoring sibling insertion order.
    ///
    /// The virtual root is never reported: when the whole tree is checked,
    /// [`ValueMode::OnlyParent`] yields the top-level keys.
    pub fn get_value(&self, mode: ValueMode) -> Vec<NodeKey> {
        let mut selected = Vec::new();
        self.traverse(None, |key, entry, _, _| {
            if key.is_root() {
                return Visit::Descend;
            }
            if entry.state == SelectionState::Checked {
                match mode {
                    ValueMode::OnlyParent => {
                        selected.push(key.clone());
                        return Visit::Skip;
                    }
                    ValueMode::OnlyLeaf => {
                        if entry.is_leaf() {
                            selected.push(key.clone());
                        }
                    }
                    ValueMode::All => selected.push(key.clone()),
                }
            }
            Visit::Descend
        });
        selected
    }

    // ==================== Propagation internals ====================

    /// Force the whole subtree below `key` to `state`, on an explicit
    /// work stack.
    fn force_descendants(&mut self, key: &NodeKey, state: SelectionState) {
        let mut work: Vec<NodeKey> = match self.children(key) {
            Some(children) => children.to_vec(),
            None => return,
        };
        while let Some(next) = work.pop() {
            if let Some(entry) = self.relation_entry_mut(&next) {
                entry.state = state;
                work.extend(entry.children.iter().cloned());
            }
        }
    }

    /// Re-derive states walking up from `from`, carrying `candidate`.
    ///
    /// A node becomes `Half` when the candidate is `Half` or its children
    /// disagree; otherwise it adopts the candidate, which at that point
    /// equals its children's uniform state. The walk ends after the
    /// virtual root. Move seeds this at the move target itself; status
    /// updates seed it at the changed node's parent.
    pub(crate) fn reconcile_upward(&mut self, from: Option<NodeKey>, mut candidate: SelectionState) {
        let mut cursor = from;
        while let Some(key) = cursor {
            if candidate == SelectionState::Half || self.is_half(&key) {
                candidate = SelectionState::Half;
            }
            let Some(entry) = self.relation_entry_mut(&key) else {
                break;
            };
            entry.state = candidate;
            cursor = entry.parent.clone();
        }
    }
}
