//! Core editing modules - YAML tree adapter and the motion editor
//!
//! These modules are independent of the command line front end.

pub mod editor;
pub mod tree;

// Re-exports for convenience
pub use editor::MotionEditor;
