//! Motion document entities.
//!
//! - `frame`: typed keyframe + actuator list
//! - `opaque`: untouched non-frame entries
//! - `document`: classification and rebuild of the top-level sequence
//! - `joints`: joint name -> actuator id table
//! - `keys`: YAML key constants

pub mod document;
pub mod frame;
pub mod joints;
pub mod keys;
pub mod opaque;

pub use document::Document;
pub use frame::{ActuatorSetting, ActuatorWriter, Frame};
pub use joints::{
    ARM_JOINTS, ActuatorPositions, DEFAULT_JOINTS, JointMap, JointPositions, arm_subset,
    default_joint_map,
};
pub use opaque::OpaqueEntry;
