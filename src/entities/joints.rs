//! Joint name -> actuator id table.
//!
//! Edits address actuators by symbolic joint name; the table resolves them.
//! It belongs to the editor instance, not to loaded documents: replacing it
//! only changes how later edits resolve.

use indexmap::IndexMap;

/// Ordered joint name -> actuator id mapping.
pub type JointMap = IndexMap<String, i32>;

/// Joint name -> target position (radians), applied in insertion order.
pub type JointPositions = IndexMap<String, f64>;

/// Actuator id -> target position (radians), applied in insertion order.
pub type ActuatorPositions = IndexMap<i32, f64>;

/// Built-in table used when no other mapping is supplied.
pub const DEFAULT_JOINTS: &[(&str, i32)] = &[
    ("rotate_torso", 22),
    ("rotate_0", 0),
    ("rotate_1", 1),
    ("rotate_2", 2),
    ("rotate_3", 3),
    ("rotate_5", 5),
];

/// Joints accepted by the arm-only edit: torso rotation plus the arm chain.
pub const ARM_JOINTS: [&str; 6] = [
    "rotate_torso",
    "rotate_0",
    "rotate_1",
    "rotate_2",
    "rotate_3",
    "rotate_5",
];

pub fn default_joint_map() -> JointMap {
    DEFAULT_JOINTS
        .iter()
        .map(|(name, id)| (name.to_string(), *id))
        .collect()
}

/// Keep only arm joints, preserving caller order.
pub fn arm_subset(positions: &JointPositions) -> JointPositions {
    positions
        .iter()
        .filter(|(name, _)| ARM_JOINTS.contains(&name.as_str()))
        .map(|(name, rad)| (name.clone(), *rad))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: Default table
    /// Validates: torso maps to 22, arm joints to their own numbers
    #[test]
    fn test_default_joint_map() {
        let map = default_joint_map();
        assert_eq!(map.len(), 6);
        assert_eq!(map.get("rotate_torso"), Some(&22));
        assert_eq!(map.get("rotate_5"), Some(&5));
        assert_eq!(map.get("rotate_4"), None);
    }

    /// Test: Arm filter
    /// Validates: unrelated joints dropped, order of the rest kept
    #[test]
    fn test_arm_subset() {
        let mut input = JointPositions::new();
        input.insert("rotate_3".into(), 0.3);
        input.insert("neck_pitch".into(), 1.0);
        input.insert("rotate_torso".into(), -0.1);

        let sub = arm_subset(&input);
        let names: Vec<&str> = sub.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["rotate_3", "rotate_torso"]);
    }

    /// Test: Nothing to keep
    /// Validates: empty result for unrelated joints only
    #[test]
    fn test_arm_subset_empty() {
        let mut input = JointPositions::new();
        input.insert("unrelated_joint".into(), 1.0);
        assert!(arm_subset(&input).is_empty());
    }
}
