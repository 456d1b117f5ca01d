//! Linear model of one roster problem.
//!
//! The model is backend-neutral: decision variables, slack variables and
//! linear rows whose coefficients are all 1. A [`SolverBackend`] turns it
//! into whatever its solver library expects.
//!
//! # Rows
//!
//! - Coverage: per (position, day, window) with positive requirement,
//!   `Σ contributing shifts + slack = requirement`. The afternoon is split
//!   into two half windows (A+DM and A+DN) sharing the afternoon requirement.
//! - One shift per day: per (employee, day), `Σ vars ≤ 1`.
//! - Rest: per (employee, adjacent day pair) when back-to-back is forbidden,
//!   `Σ night(N, DN) on day i + Σ morning(M, DM) on day i+1 ≤ 1`.
//!
//! # Objective
//!
//! Maximise `Σ (1 + preference) · var − Σ penalty · slack`, where
//! `penalty = max(1, round(BASE_PENALTY / (position_priority · shift_priority)))`.
//!
//! [`SolverBackend`]: crate::backend::SolverBackend

mod builder;


pub use builder::{penalty, ModelBuilder, BASE_PENALTY};

use std::collections::HashMap;

use rosterforge_core::{EmployeeId, ShiftCode, ShortageKey, WeeklyAvailability};

/// Identifies one decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub employee: EmployeeId,
    pub position: usize,
    pub day: usize,
    pub shift: ShiftCode,
}

/// A boolean "this employee works this shift here" variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionVar {
    pub key: SlotKey,
    /// Index of the employee in the problem's employee list.
    pub employee_index: usize,
    /// Preference bonus, already clamped to `0..=MAX_PREFERENCE`.
    pub preference: u32,
}

impl DecisionVar {
    /// Objective coefficient: the utilization bonus plus the preference.
    #[inline]
    pub fn coefficient(&self) -> i64 {
        1 + i64::from(self.preference)
    }
}

/// Unmet staffing of one coverage row, bounded by its requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackVar {
    pub key: ShortageKey,
    pub upper: u32,
    pub penalty: i64,
}

impl SlackVar {
    #[inline]
    pub fn coefficient(&self) -> i64 {
        -self.penalty
    }
}

/// A variable reference inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    Decision(usize),
    Slack(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    AtMost,
}

/// Which rule a row encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowFamily {
    Coverage(ShortageKey),
    OneShiftPerDay { employee: usize, day: usize },
    /// Night on `day` against morning on `day + 1`.
    Rest { employee: usize, day: usize },
}

/// `Σ terms (relation) rhs`, every coefficient 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearRow {
    pub family: RowFamily,
    pub terms: Vec<Term>,
    pub relation: Relation,
    pub rhs: u32,
}

impl LinearRow {
    /// Whether `decisions`/`slacks` satisfy this row.
    pub fn is_satisfied(&self, decisions: &[bool], slacks: &[u32]) -> bool {
        let lhs: u64 = self
            .terms
            .iter()
            .map(|term| match *term {
                Term::Decision(i) => u64::from(decisions.get(i).copied().unwrap_or(false)),
                Term::Slack(i) => u64::from(slacks.get(i).copied().unwrap_or(0)),
            })
            .sum();
        match self.relation {
            Relation::Equal => lhs == u64::from(self.rhs),
            Relation::AtMost => lhs <= u64::from(self.rhs),
        }
    }
}

/// The complete linear model plus the resolved inputs the interpreter
/// needs to explain a solution.
#[derive(Debug, Clone)]
pub struct RosterModel {
    pub(crate) decisions: Vec<DecisionVar>,
    pub(crate) slacks: Vec<SlackVar>,
    pub(crate) rows: Vec<LinearRow>,
    pub(crate) index: HashMap<SlotKey, usize>,
    pub(crate) availability: Vec<WeeklyAvailability>,
    pub(crate) qualified: Vec<Vec<bool>>,
}

impl RosterModel {
    pub fn decisions(&self) -> &[DecisionVar] {
        &self.decisions
    }

    pub fn slacks(&self) -> &[SlackVar] {
        &self.slacks
    }

    pub fn rows(&self) -> &[LinearRow] {
        &self.rows
    }

    /// Total number of variables.
    #[inline]
    pub fn variable_count(&self) -> usize {
        self.decisions.len() + self.slacks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variable_count() == 0
    }

    /// Index of the decision variable for `key`, if it exists.
    pub fn find(&self, key: &SlotKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Resolved availability of the employee at `employee_index`.
    pub fn availability(&self, employee_index: usize) -> Option<&WeeklyAvailability> {
        self.availability.get(employee_index)
    }

    /// Whether the employee at `employee_index` may staff `position`.
    pub fn is_qualified(&self, employee_index: usize, position: usize) -> bool {
        self.qualified
            .get(employee_index)
            .and_then(|row| row.get(position))
            .copied()
            .unwrap_or(false)
    }

    /// Coverage row of `key`, if its requirement is positive.
    pub fn coverage_row(&self, key: ShortageKey) -> Option<&LinearRow> {
        self.rows
            .iter()
            .find(|row| row.family == RowFamily::Coverage(key))
    }

    /// Objective value of a full assignment.
    pub fn objective_value(&self, decisions: &[bool], slacks: &[u32]) -> i64 {
        let gained: i64 = self
            .decisions
            .iter()
            .zip(decisions)
            .filter(|(_, &on)| on)
            .map(|(var, _)| var.coefficient())
            .sum();
        let lost: i64 = self
            .slacks
            .iter()
            .zip(slacks)
            .map(|(var, &value)| var.coefficient() * i64::from(value))
            .sum();
        gained + lost
    }
}
