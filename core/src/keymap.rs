//! Field-name configuration for raw records.

/// Names of the relational fields in raw input records.
///
/// Callers whose data uses different field names (`uuid`, `parentId`, ...)
/// pass a mapping at construction time. The mapping is a passive lookup
/// table owned by its tree, never shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Field holding the node id.
    pub id: String,
    /// Field holding the parent id (flat shape).
    pub pid: String,
    /// Field holding the nested child list (nested shape).
    pub child: String,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            pid: "pid".to_string(),
            child: "child".to_string(),
        }
    }
}

impl KeyMap {
    /// Create a mapping with the given field names.
    pub fn new(id: impl Into<String>, pid: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pid: pid.into(),
            child: child.into(),
        }
    }
}
