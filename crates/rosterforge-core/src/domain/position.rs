//! Staffed positions.

use crate::shift::ShiftGroup;

/// Position priority used when none is given (1 = most critical).
pub const DEFAULT_POSITION_PRIORITY: u32 = 5;

/// Per-shift priority used when none is given.
pub const DEFAULT_SHIFT_PRIORITY: u32 = 1;

/// A position with per-shift staffing requirements and priorities.
///
/// Lower priority numbers are more important. Priorities are at least 1;
/// [`normalized`](Self::normalized) clamps anything lower.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guards_morning: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guards_afternoon: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guards_night: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_position_priority"))]
    pub priority: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_shift_priority"))]
    pub priority_morning: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_shift_priority"))]
    pub priority_afternoon: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_shift_priority"))]
    pub priority_night: u32,
}

#[cfg(feature = "serde")]
fn default_position_priority() -> u32 {
    DEFAULT_POSITION_PRIORITY
}

#[cfg(feature = "serde")]
fn default_shift_priority() -> u32 {
    DEFAULT_SHIFT_PRIORITY
}

impl Position {
    /// Creates a position with no requirements and default priorities.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guards_morning: 0,
            guards_afternoon: 0,
            guards_night: 0,
            priority: DEFAULT_POSITION_PRIORITY,
            priority_morning: DEFAULT_SHIFT_PRIORITY,
            priority_afternoon: DEFAULT_SHIFT_PRIORITY,
            priority_night: DEFAULT_SHIFT_PRIORITY,
        }
    }

    /// Sets the number of staff required per shift group.
    pub fn with_guards(mut self, morning: u32, afternoon: u32, night: u32) -> Self {
        self.guards_morning = morning;
        self.guards_afternoon = afternoon;
        self.guards_night = night;
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_shift_priorities(mut self, morning: u32, afternoon: u32, night: u32) -> Self {
        self.priority_morning = morning;
        self.priority_afternoon = afternoon;
        self.priority_night = night;
        self
    }

    /// Required head count for `group`.
    pub fn requirement(&self, group: ShiftGroup) -> u32 {
        match group {
            ShiftGroup::Morning => self.guards_morning,
            ShiftGroup::Afternoon => self.guards_afternoon,
            ShiftGroup::Night => self.guards_night,
        }
    }

    /// Coverage priority of `group` at this position.
    pub fn shift_priority(&self, group: ShiftGroup) -> u32 {
        match group {
            ShiftGroup::Morning => self.priority_morning,
            ShiftGroup::Afternoon => self.priority_afternoon,
            ShiftGroup::Night => self.priority_night,
        }
    }

    /// Returns a copy with the name trimmed and every priority at least 1.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            priority: self.priority.max(1),
            priority_morning: self.priority_morning.max(1),
            priority_afternoon: self.priority_afternoon.max(1),
            priority_night: self.priority_night.max(1),
            ..self.clone()
        }
    }
}
