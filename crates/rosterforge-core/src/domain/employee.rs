//! Employee records.

use std::collections::HashMap;
use std::fmt;

use super::qualification::RoleSet;

/// Stable identifier of an employee within one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An employee row as delivered by the ingestion collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Comma-separated qualified positions, or `all`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: String,
    /// Whether this employee may be widened into double shifts by the
    /// auto-doubles policy.
    #[cfg_attr(feature = "serde", serde(default = "default_may_double"))]
    pub may_double: bool,
    /// Raw availability cell per day label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub availability: HashMap<String, String>,
}

#[cfg(feature = "serde")]
fn default_may_double() -> bool {
    true
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            roles: String::new(),
            may_double: true,
            availability: HashMap::new(),
        }
    }

    pub fn with_roles(mut self, roles: impl Into<String>) -> Self {
        self.roles = roles.into();
        self
    }

    pub fn with_may_double(mut self, may_double: bool) -> Self {
        self.may_double = may_double;
        self
    }

    /// Sets the raw availability cell for `day`.
    pub fn with_cell(mut self, day: impl Into<String>, cell: impl Into<String>) -> Self {
        self.availability.insert(day.into(), cell.into());
        self
    }

    /// Parses the role list.
    pub fn role_set(&self) -> RoleSet {
        RoleSet::parse(&self.roles)
    }
}
