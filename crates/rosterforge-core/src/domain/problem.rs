//! The immutable input snapshot of one roster generation.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::availability::{DoublePolicy, WeeklyAvailability};
use super::constraints::Constraints;
use super::employee::{Employee, EmployeeId};
use super::position::Position;
use crate::error::{Result, RosterError};

/// Largest preference score honoured per (employee, position).
pub const MAX_PREFERENCE: u32 = 10;

/// Manual availability overrides of one employee: day label to the five
/// values `M, A, N, Can_DM, Can_DN`.
pub type DayOverrides = BTreeMap<String, Vec<bool>>;

/// Everything one solve needs, captured before model construction starts.
///
/// Callers build a fresh problem from their editable state for every
/// generate request; the engine never reads that state directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RosterProblem {
    /// Day labels in chronological order; adjacency drives rest rules.
    pub days: Vec<String>,
    pub employees: Vec<Employee>,
    pub positions: Vec<Position>,
    pub constraints: Constraints,
    pub overrides: HashMap<EmployeeId, DayOverrides>,
    /// Position preference scores (0-10) per employee, keyed by position name.
    pub preferences: HashMap<EmployeeId, HashMap<String, i64>>,
    /// Compute gap-fill recommendations for shortages.
    pub calc_potentials: bool,
}

impl RosterProblem {
    pub fn new<I, S>(days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets a manual override column for one employee and day.
    pub fn with_override(mut self, employee: u32, day: impl Into<String>, values: impl Into<Vec<bool>>) -> Self {
        self.overrides
            .entry(EmployeeId(employee))
            .or_default()
            .insert(day.into(), values.into());
        self
    }

    pub fn with_preference(mut self, employee: u32, position: impl Into<String>, score: i64) -> Self {
        self.preferences
            .entry(EmployeeId(employee))
            .or_default()
            .insert(position.into(), score);
        self
    }

    pub fn with_calc_potentials(mut self, calc_potentials: bool) -> Self {
        self.calc_potentials = calc_potentials;
        self
    }

    /// Checks the structural invariants the model relies on.
    ///
    /// Empty employee or position lists are not errors here; they are
    /// reported as distinct solve statuses.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DomainModel`] for an empty day list, a blank
    /// position name and for duplicate day labels, employee ids or position
    /// names.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(RosterError::DomainModel("no days to schedule".to_string()));
        }

        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(day.trim()) {
                return Err(RosterError::DomainModel(format!("duplicate day label '{}'", day)));
            }
        }

        let mut seen = HashSet::new();
        for employee in &self.employees {
            if !seen.insert(employee.id) {
                return Err(RosterError::DomainModel(format!(
                    "duplicate employee id {} ('{}')",
                    employee.id, employee.name
                )));
            }
        }

        let mut seen = HashSet::new();
        for position in &self.positions {
            let name = position.name.trim();
            if name.is_empty() {
                return Err(RosterError::DomainModel(format!(
                    "blank position name '{}'",
                    position.name
                )));
            }
            if !seen.insert(name) {
                return Err(RosterError::DomainModel(format!(
                    "duplicate position name '{}'",
                    position.name
                )));
            }
        }

        Ok(())
    }

    /// Returns a copy with every position normalized and preference keys
    /// trimmed to match the normalized position names.
    ///
    /// Keys that collide after trimming keep the larger score.
    pub fn normalized(&self) -> Self {
        let preferences = self
            .preferences
            .iter()
            .map(|(&employee, prefs)| {
                let mut trimmed: HashMap<String, i64> = HashMap::with_capacity(prefs.len());
                for (position, &score) in prefs {
                    trimmed
                        .entry(position.trim().to_string())
                        .and_modify(|s| *s = (*s).max(score))
                        .or_insert(score);
                }
                (employee, trimmed)
            })
            .collect();

        Self {
            positions: self.positions.iter().map(Position::normalized).collect(),
            preferences,
            ..self.clone()
        }
    }

    /// Resolves the availability of `employee` over [`days`](Self::days).
    pub fn availability_of(&self, employee: &Employee) -> WeeklyAvailability {
        WeeklyAvailability::resolve(
            &self.days,
            &employee.availability,
            self.overrides.get(&employee.id),
            DoublePolicy {
                auto_doubles: self.constraints.auto_doubles,
                employee_may_double: employee.may_double,
            },
        )
    }

    /// Preference score of `employee` for `position`, clamped to
    /// `0..=MAX_PREFERENCE`; unspecified preferences are 0.
    pub fn preference(&self, employee: EmployeeId, position: &str) -> u32 {
        self.preferences
            .get(&employee)
            .and_then(|prefs| prefs.get(position))
            .map(|&score| score.clamp(0, i64::from(MAX_PREFERENCE)) as u32)
            .unwrap_or(0)
    }

    /// Index of the day labelled `label`.
    pub fn day_index(&self, label: &str) -> Option<usize> {
        self.days.iter().position(|d| d == label)
    }
}
