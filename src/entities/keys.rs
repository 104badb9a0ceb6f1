//! YAML key constants for frame entries.
//!
//! Avoid string typos, enable IDE autocomplete.
//! Usage: `map.get(K_DXL)`

// === Frame identity ===
/// Frame name (lookup key, not unique)
pub const K_NAME: &str = "name";
/// Editor selection flag
pub const K_SELECTED: &str = "selected";

// === Timing ===
/// Frame timestamp
pub const K_TIME: &str = "time";
/// Hold time after reaching the frame
pub const K_DELAY: &str = "delay";
/// Repeat count
pub const K_REPEAT: &str = "repeat";

// === Actuators ===
/// Actuator list (sequence of {id, position})
pub const K_DXL: &str = "dxl";
/// Actuator id inside a `dxl` element
pub const K_ID: &str = "id";
/// Actuator position in radians inside a `dxl` element
pub const K_POSITION: &str = "position";

/// Keys whose joint presence marks a top-level entry as a frame
pub const FRAME_MARKERS: [&str; 3] = [K_DXL, K_TIME, K_NAME];
