//! Motion frame model: timing fields plus an ordered actuator list.
//!
//! # Shape
//!
//! A top-level entry is a frame candidate when it is a map holding `dxl`,
//! `time` and `name` (see [`Frame::is_candidate`]). Candidates must then pass
//! [`Frame::from_node`]:
//!
//! - `time`, `name` required; `delay`, `repeat`, `selected` default to 0/0/false
//! - `dxl` must be a sequence of `{id: int, position: float}` maps
//!
//! Scalars are read loosely: `name: 2` is the name `"2"`, `position: 1` is
//! `1.0`, and numeric strings are accepted for numeric fields.
//!
//! # Edits
//!
//! [`Frame::writer`] builds a transient id -> index table once so a batch of
//! position writes does not rescan the actuator list. Unknown ids are
//! appended, so existing actuator order never changes.

use std::collections::HashMap;
use std::fmt;

use serde_yml::{Mapping, Value};

use super::keys::*;
use crate::error::{EditorError, Result};

/// One actuator target: id + position in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorSetting {
    pub id: i32,
    pub position: f64,
}

impl ActuatorSetting {
    pub fn new(id: i32, position: f64) -> Self {
        Self { id, position }
    }
}

/// Named motion keyframe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub time: i32,
    pub delay: i32,
    pub repeat: i32,
    pub name: String,
    pub selected: bool,
    /// Actuator targets in document order
    pub actuators: Vec<ActuatorSetting>,
}

impl Frame {
    /// Create an empty frame at `time`.
    pub fn new(name: impl Into<String>, time: i32) -> Self {
        Self {
            time,
            name: name.into(),
            ..Default::default()
        }
    }

    /// True if `node` is a map with all of `dxl`, `time` and `name`.
    pub fn is_candidate(node: &Value) -> bool {
        node.as_mapping()
            .is_some_and(|map| FRAME_MARKERS.iter().all(|key| map.contains_key(*key)))
    }

    /// Convert a frame candidate into a `Frame`.
    ///
    /// `index` is the entry position in the top-level sequence; it labels
    /// errors when the name itself cannot be read.
    pub fn from_node(node: &Value, index: usize) -> Result<Self> {
        let label = node
            .get(K_NAME)
            .and_then(scalar_string)
            .unwrap_or_else(|| format!("#{}", index));

        let map = node
            .as_mapping()
            .ok_or_else(|| EditorError::malformed(&label, "entry is not a map"))?;

        let name = map
            .get(K_NAME)
            .and_then(scalar_string)
            .ok_or_else(|| EditorError::malformed(&label, "'name' is not a scalar"))?;

        let time = match map.get(K_TIME) {
            Some(v) => read_i32(v, K_TIME, &label)?,
            None => return Err(EditorError::malformed(&label, "missing 'time'")),
        };
        let delay = optional(map, K_DELAY, |v| read_i32(v, K_DELAY, &label))?.unwrap_or(0);
        let repeat = optional(map, K_REPEAT, |v| read_i32(v, K_REPEAT, &label))?.unwrap_or(0);
        let selected = optional(map, K_SELECTED, |v| {
            scalar_bool(v).ok_or_else(|| EditorError::malformed(&label, "'selected' is not a bool"))
        })?
        .unwrap_or(false);

        let dxl = match map.get(K_DXL) {
            Some(Value::Sequence(seq)) => seq,
            Some(Value::Null) | None => {
                return Err(EditorError::malformed(&label, "missing 'dxl' sequence"));
            }
            Some(_) => return Err(EditorError::malformed(&label, "'dxl' is not a sequence")),
        };

        let mut actuators = Vec::with_capacity(dxl.len());
        for (i, elem) in dxl.iter().enumerate() {
            actuators.push(read_actuator(elem, i, &label)?);
        }

        Ok(Self {
            time,
            delay,
            repeat,
            name,
            selected,
            actuators,
        })
    }

    /// Rebuild the YAML map: `time, delay, repeat, name, selected, dxl`.
    pub fn to_node(&self) -> Value {
        let dxl: Vec<Value> = self
            .actuators
            .iter()
            .map(|a| {
                let mut one = Mapping::new();
                one.insert(Value::from(K_ID), Value::from(a.id));
                one.insert(Value::from(K_POSITION), Value::from(a.position));
                Value::Mapping(one)
            })
            .collect();

        let mut map = Mapping::new();
        map.insert(Value::from(K_TIME), Value::from(self.time));
        map.insert(Value::from(K_DELAY), Value::from(self.delay));
        map.insert(Value::from(K_REPEAT), Value::from(self.repeat));
        map.insert(Value::from(K_NAME), Value::from(self.name.as_str()));
        map.insert(Value::from(K_SELECTED), Value::from(self.selected));
        map.insert(Value::from(K_DXL), Value::Sequence(dxl));
        Value::Mapping(map)
    }

    /// Last actuator entry with `id`; the same entry an edit would update.
    pub fn actuator(&self, id: i32) -> Option<&ActuatorSetting> {
        self.actuators.iter().rev().find(|a| a.id == id)
    }

    /// Begin a batch of position writes.
    pub fn writer(&mut self) -> ActuatorWriter<'_> {
        ActuatorWriter::new(&mut self.actuators)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------------------------------------")?;
        writeln!(f, "Frame name   : {}", self.name)?;
        writeln!(f, "time         : {}", self.time)?;
        writeln!(f, "delay        : {}", self.delay)?;
        writeln!(f, "repeat       : {}", self.repeat)?;
        writeln!(f, "selected     : {}", self.selected)?;
        writeln!(f, "Dxl entries  : {}", self.actuators.len())?;
        for a in &self.actuators {
            writeln!(f, "  - id: {:<4} pos(rad): {}", a.id, a.position)?;
        }
        write!(f, "------------------------------------")
    }
}

/// Batched writer over a frame's actuator list.
///
/// Holds an id -> index table built once; when an id appears more than
/// once the table points at the last occurrence.
pub struct ActuatorWriter<'a> {
    actuators: &'a mut Vec<ActuatorSetting>,
    index: HashMap<i32, usize>,
}

impl<'a> ActuatorWriter<'a> {
    fn new(actuators: &'a mut Vec<ActuatorSetting>) -> Self {
        let index = actuators
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();
        Self { actuators, index }
    }

    /// Overwrite the position of `id` in place, or append a new entry.
    ///
    /// Returns true if an entry was appended.
    pub fn set(&mut self, id: i32, position: f64) -> bool {
        match self.index.get(&id).copied() {
            Some(i) => {
                self.actuators[i].position = position;
                false
            }
            None => {
                self.actuators.push(ActuatorSetting::new(id, position));
                self.index.insert(id, self.actuators.len() - 1);
                true
            }
        }
    }
}

fn read_actuator(elem: &Value, i: usize, label: &str) -> Result<ActuatorSetting> {
    let map = elem
        .as_mapping()
        .ok_or_else(|| EditorError::malformed(label, format!("dxl[{}] is not a map", i)))?;

    let id = map
        .get(K_ID)
        .ok_or_else(|| EditorError::malformed(label, format!("dxl[{}] has no 'id'", i)))?;
    let id = scalar_i32(id)
        .ok_or_else(|| EditorError::malformed(label, format!("dxl[{}] 'id' is not an integer", i)))?;

    let position = map
        .get(K_POSITION)
        .ok_or_else(|| EditorError::malformed(label, format!("dxl[{}] has no 'position'", i)))?;
    let position = scalar_f64(position).ok_or_else(|| {
        EditorError::malformed(label, format!("dxl[{}] 'position' is not a number", i))
    })?;

    Ok(ActuatorSetting::new(id, position))
}

fn read_i32(value: &Value, key: &str, label: &str) -> Result<i32> {
    scalar_i32(value)
        .ok_or_else(|| EditorError::malformed(label, format!("'{}' is not a 32-bit integer", key)))
}

/// Absent or null optional field -> `None`.
fn optional<T>(map: &Mapping, key: &str, read: impl FnOnce(&Value) -> Result<T>) -> Result<Option<T>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => read(v).map(Some),
    }
}

/// Numbers are re-rendered from their parsed value (`1.50` -> `"1.5"`);
/// the source spelling is not kept by the YAML tree.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "y" => Some(true),
            "false" | "no" | "off" | "n" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
