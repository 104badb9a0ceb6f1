//! motion-edit - round-trip editor for YAML robot motion sequences
//!
//! Loads a motion document (a YAML sequence of frames plus arbitrary other
//! entries), edits actuator positions by joint name or actuator id, and
//! saves it back without losing the entries it does not understand.

// Core engine (tree adapter, editor)
pub mod core;

// App modules
pub mod cli;
pub mod config;
pub mod entities;
pub mod error;

pub use crate::core::editor::MotionEditor;
pub use entities::{ActuatorSetting, Document, Frame, JointMap, JointPositions, OpaqueEntry};
pub use error::{EditorError, Result};
