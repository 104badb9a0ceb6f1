//! Opaque top-level entries.
//!
//! Anything in a motion document that is not a frame candidate (headers,
//! comments-as-data, tool metadata, stray scalars) is kept here untouched and
//! written back verbatim on save. Only the semantic value is kept; quoting,
//! comments and layout of the original text are not.

use serde_yml::Value;

/// Inert wrapper around one unrecognized top-level node.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueEntry {
    node: Value,
}

impl OpaqueEntry {
    pub(crate) fn new(node: Value) -> Self {
        Self { node }
    }

    /// Original node as loaded.
    pub fn node(&self) -> &Value {
        &self.node
    }

    /// Copy of the original node for rebuilding.
    pub fn to_node(&self) -> Value {
        self.node.clone()
    }

    /// Short shape name, for log lines.
    pub fn kind(&self) -> &'static str {
        match &self.node {
            Value::Null => "null",
            Value::Bool(_) | Value::Number(_) | Value::String(_) => "scalar",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "map",
            _ => "tagged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: Entry is returned as stored
    /// Validates: node() and to_node() expose the same untouched value
    #[test]
    fn test_opaque_keeps_node() {
        let value: Value = serde_yml::from_str("{header: {version: 3, robot: humanoid}}").unwrap();
        let entry = OpaqueEntry::new(value.clone());
        assert_eq!(entry.node(), &value);
        assert_eq!(entry.to_node(), value);
        assert_eq!(entry.kind(), "map");
    }

    /// Test: Shape names
    /// Validates: scalars and sequences are labelled for logging
    #[test]
    fn test_kind() {
        assert_eq!(OpaqueEntry::new(Value::from(3)).kind(), "scalar");
        assert_eq!(OpaqueEntry::new(Value::Sequence(vec![])).kind(), "sequence");
        assert_eq!(OpaqueEntry::new(Value::Null).kind(), "null");
    }
}
