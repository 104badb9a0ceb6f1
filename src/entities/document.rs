//! Round-trip document model.
//!
//! A motion document is a YAML sequence. Each element is classified once at
//! load time:
//!
//! - frame candidate (map with `dxl`, `time`, `name`) -> [`Frame`]
//! - anything else -> [`OpaqueEntry`], kept as-is
//!
//! Rebuild emits all opaque entries first, then all frames, each group in
//! its original relative order. Interleaving of the two groups in the source
//! file is NOT reproduced; reclassifying the rebuilt tree yields the same
//! `Document`.

use log::{debug, trace};
use serde_yml::Value;

use super::frame::Frame;
use super::opaque::OpaqueEntry;
use crate::error::{EditorError, Result};

/// Frames plus every entry the editor does not model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    opaque_entries: Vec<OpaqueEntry>,
    frames: Vec<Frame>,
}

impl Document {
    /// Classify the top-level sequence of a parsed document.
    ///
    /// Fails with `InvalidDocument` if `root` is not a sequence and with
    /// `MalformedFrame` on the first bad frame candidate. Nothing is
    /// returned on failure, so callers can keep their previous state.
    pub fn from_tree(root: Value) -> Result<Self> {
        let items = match root {
            Value::Sequence(items) => items,
            other => {
                return Err(EditorError::InvalidDocument(format!(
                    "top level must be a YAML sequence, found {}",
                    shape_name(&other)
                )));
            }
        };

        let mut doc = Document::default();
        for (index, item) in items.into_iter().enumerate() {
            if Frame::is_candidate(&item) {
                doc.frames.push(Frame::from_node(&item, index)?);
            } else {
                let entry = OpaqueEntry::new(item);
                trace!("Entry #{} kept as opaque {}", index, entry.kind());
                doc.opaque_entries.push(entry);
            }
        }

        debug!(
            "Classified document: {} frames, {} opaque entries",
            doc.frames.len(),
            doc.opaque_entries.len()
        );
        Ok(doc)
    }

    /// Rebuild the top-level sequence: opaque entries, then frames.
    pub fn to_tree(&self) -> Value {
        let mut out = Vec::with_capacity(self.opaque_entries.len() + self.frames.len());
        out.extend(self.opaque_entries.iter().map(OpaqueEntry::to_node));
        out.extend(self.frames.iter().map(Frame::to_node));
        Value::Sequence(out)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn opaque_entries(&self) -> &[OpaqueEntry] {
        &self.opaque_entries
    }

    /// Frame names in document order.
    pub fn frame_names(&self) -> Vec<String> {
        self.frames.iter().map(|f| f.name.clone()).collect()
    }

    /// First frame named `name`.
    pub fn find_frame(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.name == name)
    }

    /// First frame named `name`, mutable.
    pub fn find_frame_mut(&mut self, name: &str) -> Option<&mut Frame> {
        self.frames.iter_mut().find(|f| f.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.opaque_entries.is_empty()
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Mapping(_) => "a map",
        Value::Sequence(_) => "a sequence",
        Value::Bool(_) | Value::Number(_) | Value::String(_) => "a scalar",
        _ => "a tagged node",
    }
}
