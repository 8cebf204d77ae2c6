//! Structural edits: append, remove and move.
//!
//! Every edit leaves the content and relation indices consistent with each
//! other. Append is staged so a rejected call writes nothing; move guards
//! against cycles before touching either index.

use crate::builder::BuiltIndex;
use crate::tree::Tree;
use std::collections::HashSet;
use trellis_core::{Attributes, NodeKey, TreeError, TreeResult};

impl Tree {
    // ==================== Append ====================

    /// Index `records` and splice the result under `target` (virtual root
    /// when omitted). Returns the keys that became direct children of
    /// `target`, in splice order.
    ///
    /// Root-level entries of the built subtree are re-parented to `target`.
    /// A flat record that declared a parent already present in the live
    /// index is linked onto that parent instead, so one call can attach to
    /// several parents at once.
    ///
    /// The merge is staged: every incoming key is validated against the
    /// live index before the first write, so a rejected call leaves the
    /// tree untouched. Selection state is not re-derived at the attachment
    /// point; callers that need it re-run a state update there.
    pub fn append(
        &mut self,
        records: Vec<Attributes>,
        target: Option<&NodeKey>,
    ) -> TreeResult<Vec<NodeKey>> {
        let target = target.cloned().unwrap_or(NodeKey::Root);
        if !self.contains(&target) {
            return Err(TreeError::TargetNotFound(target));
        }
        let BuiltIndex {
            mut content,
            mut relation,
            implicit,
        } = self.build_index(records);
        let implicit: HashSet<NodeKey> = implicit.into_iter().collect();

        // Validate. Incoming keys must be new to the live index, except
        // implicit placeholders naming a live node: those are attachment
        // points, not additions.
        let mut attach_points: HashSet<NodeKey> = HashSet::new();
        for key in relation.keys() {
            if key.is_root() || !self.contains(key) {
                continue;
            }
            if implicit.contains(key) {
                attach_points.insert(key.clone());
            } else {
                return Err(TreeError::DuplicateNode(key.clone()));
            }
        }

        // Splice. Walk the built root's children in order: real top-level
        // nodes re-parent to `target`, attachment points hand their
        // children to the live node of the same key.
        let incoming_roots = relation
            .remove(&NodeKey::Root)
            .map(|root| root.children)
            .unwrap_or_default();
        let mut appended = Vec::new();
        for key in incoming_roots {
            if attach_points.contains(&key) {
                content.remove(&key);
                if let Some(stub) = relation.remove(&key) {
                    for child in stub.children {
                        // The child already names `key` as its parent
                        self.relation_mut().link_child(&key, child);
                    }
                }
            } else {
                if let Some(entry) = relation.get_mut(&key) {
                    entry.parent = Some(target.clone());
                }
                self.relation_mut().link_child(&target, key.clone());
                appended.push(key);
            }
        }

        // Merge the remaining entries wholesale.
        self.content_mut().absorb(content);
        self.relation_mut().absorb(relation);
        Ok(appended)
    }

    // ==================== Remove ====================

    /// Delete `key` and every descendant from both indices.
    ///
    /// The key is unlinked from its former parent's child list; descendants
    /// need no unlinking of their own since their parents die with them.
    /// Unknown keys are a no-op with a diagnostic. Removing the virtual
    /// root removes the entire tree.
    pub fn remove(&mut self, key: &NodeKey) {
        let Some(entry) = self.relation_mut().remove(key) else {
            tracing::warn!(key = %key, "remove: key not indexed, ignoring");
            return;
        };
        self.content_mut().remove(key);
        if let Some(parent) = entry.parent.as_ref() {
            self.relation_mut().unlink_child(parent, key);
        }
        let mut work = entry.children;
        while let Some(next) = work.pop() {
            if let Some(entry) = self.relation_mut().remove(&next) {
                work.extend(entry.children);
            }
            self.content_mut().remove(&next);
        }
    }

    // ==================== Move ====================

    /// True iff `descendant` lies strictly below `ancestor`.
    pub fn is_descendant(&self, ancestor: &NodeKey, descendant: &NodeKey) -> bool {
        let mut work: Vec<NodeKey> = match self.children(ancestor) {
            Some(children) => children.to_vec(),
            None => return false,
        };
        while let Some(next) = work.pop() {
            if &next == descendant {
                return true;
            }
            if let Some(children) = self.children(&next) {
                work.extend(children.iter().cloned());
            }
        }
        false
    }

    /// True iff `key` can be relocated under `target`: the two differ,
    /// both are indexed, and `target` does not sit inside `key`'s subtree.
    pub fn is_moveable(&self, key: &NodeKey, target: &NodeKey) -> bool {
        if key == target {
            return false;
        }
        if !self.contains(key) || !self.contains(target) {
            return false;
        }
        !self.is_descendant(key, target)
    }

    /// Relocate `key`, subtree unchanged, to be a child of `target`.
    ///
    /// An unmoveable pair is a no-op returning `false`, reported through
    /// the diagnostic channel. On success the states of `target` and its
    /// ancestors are re-derived, seeded with `target`'s current state; the
    /// moved subtree keeps its own states. Returns `true`.
    pub fn move_to(&mut self, key: &NodeKey, target: &NodeKey) -> bool {
        if !self.is_moveable(key, target) {
            tracing::warn!(key = %key, target = %target, "move_to: unmoveable pair, ignoring");
            return false;
        }
        // The moveable check rules out the virtual root as `key`, so a
        // parent always exists here.
        let Some(old_parent) = self.parent(key).cloned() else {
            return false;
        };
        self.relation_mut().unlink_child(&old_parent, key);
        if let Some(entry) = self.relation_entry_mut(key) {
            entry.parent = Some(target.clone());
        }
        self.relation_mut().link_child(target, key.clone());

        let seed = self.state(target).unwrap_or_default();
        self.reconcile_upward(Some(target.clone()), seed);
        true
    }
}
