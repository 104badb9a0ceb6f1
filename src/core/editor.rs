//! Motion editor: load, look up, edit and save a motion document
//!
//! **Architecture**: `MotionEditor` owns one [`Document`] and one
//! [`JointMap`]. The document is replaced wholesale by a successful load and
//! mutated in place by edits; the joint map only affects how later edits
//! resolve joint names.
//!
//! # Load
//!
//! Text is parsed and fully classified into a fresh `Document` before the
//! current one is touched. Any error leaves the previous document intact.
//!
//! # Edits
//!
//! - `edit_joints`: joint names resolved through the joint map
//! - `edit_four_arm_joints`: arm joints only, never strict
//! - `edit_actuators`: raw actuator ids, no joint map
//!
//! All three target the FIRST frame with the given name. Existing actuator
//! ids are overwritten in place, new ones appended.
//!
//! Strict edits apply eagerly: if the third joint is unknown, the first two
//! are already written when `UnknownJoint` is returned.
//!
//! # Threading
//!
//! No internal locking. Share across threads behind the caller's own mutex.

use std::path::Path;

use log::{debug, info};

use super::tree;
use crate::entities::{
    ActuatorPositions, Document, Frame, JointMap, JointPositions, arm_subset, default_joint_map,
};
use crate::error::{EditorError, Result};

/// Round-trip editor for one motion document.
#[derive(Debug, Clone)]
pub struct MotionEditor {
    document: Document,
    joint_to_id: JointMap,
}

impl Default for MotionEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionEditor {
    /// Editor with the built-in joint table and an empty document.
    pub fn new() -> Self {
        Self::with_joint_map(default_joint_map())
    }

    /// Editor with a caller-provided joint table.
    pub fn with_joint_map(joint_to_id: JointMap) -> Self {
        Self {
            document: Document::default(),
            joint_to_id,
        }
    }

    // === Load / save ===

    /// Load a motion file, replacing the current document on success.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let document = Document::from_tree(tree::read_file(path)?)?;
        info!(
            "Loaded {}: {} frames, {} opaque entries",
            path.display(),
            document.frames().len(),
            document.opaque_entries().len()
        );
        self.document = document;
        Ok(())
    }

    /// Load from YAML text, replacing the current document on success.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        self.document = Document::from_tree(tree::parse(text)?)?;
        Ok(())
    }

    /// Write the rebuilt document to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        tree::write_file(path, &self.document.to_tree())?;
        info!(
            "Saved {}: {} frames, {} opaque entries",
            path.display(),
            self.document.frames().len(),
            self.document.opaque_entries().len()
        );
        Ok(())
    }

    /// Rebuilt document as YAML text.
    pub fn to_yaml_string(&self) -> Result<String> {
        tree::emit(&self.document.to_tree())
    }

    // === Lookup ===

    /// Frame names in document order.
    pub fn list_frame_names(&self) -> Vec<String> {
        self.document.frame_names()
    }

    /// Copy of the first frame named `name`.
    pub fn get_frame(&self, name: &str) -> Option<Frame> {
        self.document.find_frame(name).cloned()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn frame_count(&self) -> usize {
        self.document.frames().len()
    }

    pub fn opaque_count(&self) -> usize {
        self.document.opaque_entries().len()
    }

    // === Edits ===

    /// Set joint positions (radians) on the first frame named `name`.
    ///
    /// Unknown joint names are skipped, or fail with `UnknownJoint` when
    /// `strict` is set (earlier entries stay applied).
    pub fn edit_joints(&mut self, name: &str, positions: &JointPositions, strict: bool) -> Result<()> {
        let frame = self
            .document
            .find_frame_mut(name)
            .ok_or_else(|| EditorError::FrameNotFound(name.to_string()))?;

        let mut writer = frame.writer();
        let (mut updated, mut appended, mut skipped) = (0usize, 0usize, 0usize);
        for (joint, &rad) in positions {
            let Some(&id) = self.joint_to_id.get(joint) else {
                if strict {
                    return Err(EditorError::UnknownJoint(joint.clone()));
                }
                skipped += 1;
                continue;
            };
            if writer.set(id, rad) {
                appended += 1;
            } else {
                updated += 1;
            }
        }

        debug!(
            "edit_joints '{}': {} updated, {} appended, {} skipped",
            name, updated, appended, skipped
        );
        Ok(())
    }

    /// Like `edit_joints` but limited to torso + arm joints, never strict.
    ///
    /// If none of the given joints are arm joints this is a no-op and the
    /// frame is not even looked up, so a missing `name` is not an error here.
    pub fn edit_four_arm_joints(&mut self, name: &str, positions: &JointPositions) -> Result<()> {
        let subset = arm_subset(positions);
        if subset.is_empty() {
            debug!("edit_four_arm_joints '{}': no arm joints given, skipping", name);
            return Ok(());
        }
        self.edit_joints(name, &subset, false)
    }

    /// Set positions by raw actuator id on the first frame named `name`.
    pub fn edit_actuators(&mut self, name: &str, positions: &ActuatorPositions) -> Result<()> {
        let frame = self
            .document
            .find_frame_mut(name)
            .ok_or_else(|| EditorError::FrameNotFound(name.to_string()))?;

        let mut writer = frame.writer();
        let (mut updated, mut appended) = (0usize, 0usize);
        for (&id, &rad) in positions {
            if writer.set(id, rad) {
                appended += 1;
            } else {
                updated += 1;
            }
        }

        debug!(
            "edit_actuators '{}': {} updated, {} appended",
            name, updated, appended
        );
        Ok(())
    }

    // === Joint map ===

    pub fn joint_to_id(&self) -> &JointMap {
        &self.joint_to_id
    }

    /// Replace the joint table. Loaded frames are not touched.
    pub fn set_joint_to_id(&mut self, joint_to_id: JointMap) {
        self.joint_to_id = joint_to_id;
    }
}
