//! Normalization of raw records into the canonical index pair.
//!
//! Raw input comes in two shapes: flat, where hierarchy is expressed through
//! a per-record parent-id field, and nested, where each record may embed a
//! child list. Both are normalized into the same `(ContentIndex,
//! RelationIndex)` pair, so everything downstream of a load works on one
//! canonical form.
//!
//! Parent resolution is strict: a parent field that is absent or `Null`
//! means "top level"; any defined scalar, including `0`, is a real parent
//! reference.

use crate::index::{ContentIndex, RelationEntry, RelationIndex};
use std::collections::HashSet;
use trellis_core::{Attributes, KeyMap, NodeKey, Value};

/// Input shape of a record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Hierarchy is expressed through parent-id fields.
    Flat,
    /// At least one record embeds a child list; the nested algorithm
    /// handles the whole collection.
    Nested,
}

/// Result of building an index pair from raw records.
#[derive(Debug, Clone, Default)]
pub struct BuiltIndex {
    /// Attribute bags, keyed by node.
    pub content: ContentIndex,
    /// Parent/children links and selection state, keyed by node.
    pub relation: RelationIndex,
    /// Keys referenced as parents but never defined by a record. They are
    /// synthesized as empty-content nodes under the virtual root, in
    /// first-reference order after the explicit top-level nodes.
    pub implicit: Vec<NodeKey>,
}

/// Detect the input shape: nested iff any record carries the child field.
pub fn detect_shape(records: &[Attributes], keys: &KeyMap) -> Shape {
    if records.iter().any(|r| r.contains_key(&keys.child)) {
        Shape::Nested
    } else {
        Shape::Flat
    }
}

/// Build an index pair from raw records.
///
/// Pure with respect to any live tree: the caller decides whether the
/// result replaces an index (`load`) or is spliced into one (`append`).
/// The virtual-root entry is always present in the result.
pub fn build_index(records: Vec<Attributes>, keys: &KeyMap) -> BuiltIndex {
    let shape = detect_shape(&records, keys);
    let mut builder = Builder::new(keys);
    match shape {
        Shape::Flat => builder.build_flat(records),
        Shape::Nested => builder.build_nested(records),
    }
    builder.finish()
}

struct Builder<'k> {
    keys: &'k KeyMap,
    content: ContentIndex,
    relation: RelationIndex,
    /// Keys a record has defined (as opposed to merely referenced).
    defined: HashSet<NodeKey>,
    /// Parent keys in first-reference order, for stub finalization.
    referenced: Vec<NodeKey>,
}

impl<'k> Builder<'k> {
    fn new(keys: &'k KeyMap) -> Self {
        let mut relation = RelationIndex::new();
        relation.insert(NodeKey::Root, RelationEntry::root());
        Self {
            keys,
            content: ContentIndex::new(),
            relation,
            defined: HashSet::new(),
            referenced: Vec::new(),
        }
    }

    /// Single pass in input order; no record carries a child list.
    fn build_flat(&mut self, records: Vec<Attributes>) {
        for record in records {
            self.index_record(record, None);
        }
    }

    /// Depth-first descent over embedded child lists, on an explicit stack
    /// so input depth does not consume call stack.
    fn build_nested(&mut self, records: Vec<Attributes>) {
        let mut work: Vec<(Attributes, Option<NodeKey>)> =
            records.into_iter().rev().map(|r| (r, None)).collect();
        while let Some((record, context)) = work.pop() {
            if let Some((id, children)) = self.index_record(record, context.as_ref()) {
                for child in children.into_iter().rev() {
                    work.push((child, Some(id.clone())));
                }
            }
        }
    }

    /// Index one record: split off the relational fields, store the rest as
    /// content, and link the node under its resolved parent. Returns the
    /// record's key and its embedded child list, if any.
    fn index_record(
        &mut self,
        mut record: Attributes,
        context: Option<&NodeKey>,
    ) -> Option<(NodeKey, Vec<Attributes>)> {
        let id = match record.remove(&self.keys.id).as_ref().and_then(Value::as_key) {
            Some(id) => id,
            None => {
                tracing::warn!(field = %self.keys.id, "record without a usable id field, skipping");
                return None;
            }
        };
        if self.defined.contains(&id) {
            tracing::warn!(id = %id, "record redefines an already indexed key, skipping");
            return None;
        }

        // A declared parent wins over the context; absent or Null falls
        // back to the context (the virtual root at top level).
        let parent = match record.remove(&self.keys.pid) {
            None | Some(Value::Null) => context.cloned().unwrap_or(NodeKey::Root),
            Some(value) => match value.as_key() {
                Some(parent) => parent,
                None => {
                    tracing::warn!(
                        id = %id,
                        field = %self.keys.pid,
                        "parent field is not a usable key, treating as top level"
                    );
                    context.cloned().unwrap_or(NodeKey::Root)
                }
            },
        };

        // A self-referencing parent would loop every downstream walk
        let parent = if parent == id {
            tracing::warn!(id = %id, "record declares itself as parent, treating as top level");
            context.cloned().unwrap_or(NodeKey::Root)
        } else {
            parent
        };

        let children = match record.remove(&self.keys.child) {
            Some(Value::Children(list)) => list,
            _ => Vec::new(),
        };

        self.content.insert(id.clone(), record);
        self.defined.insert(id.clone());

        // Link under the parent, creating a placeholder lazily for a parent
        // that has not been defined yet (out-of-order flat input).
        if !self.relation.contains(&parent) {
            self.referenced.push(parent.clone());
        }
        self.relation.ensure(parent.clone()).children.push(id.clone());
        self.relation.ensure(id.clone()).parent = Some(parent);

        Some((id, children))
    }

    /// Attach every still-undefined placeholder under the virtual root as
    /// an empty-content node and report it as implicit.
    fn finish(mut self) -> BuiltIndex {
        let mut implicit = Vec::new();
        for key in std::mem::take(&mut self.referenced) {
            if self.defined.contains(&key) {
                continue;
            }
            self.content.insert(key.clone(), Attributes::new());
            self.relation.ensure(key.clone()).parent = Some(NodeKey::Root);
            self.relation.ensure(NodeKey::Root).children.push(key.clone());
            implicit.push(key);
        }
        BuiltIndex {
            content: self.content,
            relation: self.relation,
            implicit,
        }
    }
}
