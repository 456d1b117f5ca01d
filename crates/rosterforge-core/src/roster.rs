//! Roster outcome types.
//!
//! Shortages and recommendations are keyed by structured keys
//! ([`ShortageKey`], [`GapKey`]); the `day|position|window` strings the
//! presentation layer shows are only produced by the `label()` methods.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::EmployeeId;
use crate::score::RosterScore;
use crate::shift::{CoverageWindow, ShiftCode, ShiftGroup};

/// Raw shift marker used by shortage rows.
pub const SHORTAGE_MARKER: &str = "SHORTAGE";

/// Status of one generate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SolveStatus {
    /// Proven optimal roster.
    Optimal,
    /// Valid roster found within solver limits; a better one may exist.
    Feasible,
    /// The model has no solution (a modeling defect: staffing is soft).
    Infeasible,
    /// The backend rejected the model.
    ModelInvalid,
    /// The backend stopped without a usable answer.
    Unknown,
    /// Nothing to schedule: no employees.
    NoEmployees,
    /// Nothing to schedule: no positions.
    NoPositions,
}

impl SolveStatus {
    /// Returns the status as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::ModelInvalid => "MODEL_INVALID",
            SolveStatus::Unknown => "UNKNOWN",
            SolveStatus::NoEmployees => "NO_EMPLOYEES",
            SolveStatus::NoPositions => "NO_POSITIONS",
        }
    }

    /// Whether a roster was produced.
    pub fn is_solved(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One employee working one shift at one position on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub employee: EmployeeId,
    pub employee_name: String,
    pub position: usize,
    pub position_name: String,
    pub day: usize,
    pub day_label: String,
    pub shift: ShiftCode,
}

/// What a roster row represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RowKind {
    Assigned { shift: ShiftCode, employee: String },
    Shortage { group: ShiftGroup, count: u32 },
}

/// A display row: real assignments and synthetic shortage rows share one
/// table so shortages render inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterRow {
    pub day: usize,
    pub day_label: String,
    pub position: String,
    pub shift_label: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: RowKind,
}

impl RosterRow {
    /// Raw shift code, or [`SHORTAGE_MARKER`] for shortage rows.
    pub fn raw_shift(&self) -> &'static str {
        match &self.kind {
            RowKind::Assigned { shift, .. } => shift.code(),
            RowKind::Shortage { .. } => SHORTAGE_MARKER,
        }
    }

    /// Employee column text: the name, or a shortage marker with count.
    pub fn employee_display(&self) -> String {
        match &self.kind {
            RowKind::Assigned { employee, .. } => employee.clone(),
            RowKind::Shortage { count, .. } => format!("⚠️ חוסר ({})", count),
        }
    }

    #[inline]
    pub fn is_shortage(&self) -> bool {
        matches!(self.kind, RowKind::Shortage { .. })
    }
}

/// Identifies one coverage equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortageKey {
    pub day: usize,
    pub position: usize,
    pub window: CoverageWindow,
}

/// Unmet staffing of one coverage window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortage {
    pub key: ShortageKey,
    pub day_label: String,
    pub position_name: String,
    pub count: u32,
}

impl Shortage {
    /// `day|position|window` display label.
    pub fn label(&self) -> String {
        format!("{}|{}|{}", self.day_label, self.position_name, self.key.window.label())
    }
}

/// All shortages of a solve, in model order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShortageSummary(Vec<Shortage>);

impl ShortageSummary {
    pub fn new(shortages: Vec<Shortage>) -> Self {
        Self(shortages)
    }

    pub fn get(&self, key: ShortageKey) -> Option<u32> {
        self.0.iter().find(|s| s.key == key).map(|s| s.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shortage> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every window's shortage.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|s| s.count).sum()
    }

    /// Label to count, for display.
    pub fn labels(&self) -> BTreeMap<String, u32> {
        self.0.iter().map(|s| (s.label(), s.count)).collect()
    }
}

/// Identifies one shortage after collapsing afternoon halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapKey {
    pub day: usize,
    pub position: usize,
    pub group: ShiftGroup,
}

/// Candidates that could cover one shortage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapRecommendation {
    pub key: GapKey,
    pub day_label: String,
    pub position_name: String,
    /// Declared availability for the missing shift.
    pub available: Vec<String>,
    /// Qualified and free, but did not declare availability.
    pub potential: Vec<String>,
}

impl GapRecommendation {
    /// `position | day | shift` display label.
    pub fn label(&self) -> String {
        format!(
            "{} | {} | {}",
            self.position_name,
            self.day_label,
            self.key.group.display_label()
        )
    }
}

/// An employee available on a day who received no assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurplusEntry {
    pub employee: EmployeeId,
    pub name: String,
    /// Still-available shift groups (rest-blocked ones removed).
    pub shifts: Vec<ShiftGroup>,
}

impl SurplusEntry {
    /// Human-readable joined shift list.
    pub fn shifts_display(&self) -> String {
        self.shifts
            .iter()
            .map(|g| g.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Surplus employees of one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySurplus {
    pub day: usize,
    pub day_label: String,
    pub entries: Vec<SurplusEntry>,
}

/// Everything a generate request returns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterOutcome {
    pub status: SolveStatus,
    pub score: Option<RosterScore>,
    pub assignments: Vec<Assignment>,
    pub roster: Vec<RosterRow>,
    pub shortages: ShortageSummary,
    pub gap_recommendations: Vec<GapRecommendation>,
    pub surplus: Vec<DaySurplus>,
    pub diagnostics: Vec<String>,
}

impl RosterOutcome {
    /// An outcome without a roster.
    pub fn terminal(status: SolveStatus, diagnostics: Vec<String>) -> Self {
        Self {
            status,
            score: None,
            assignments: Vec::new(),
            roster: Vec::new(),
            shortages: ShortageSummary::default(),
            gap_recommendations: Vec::new(),
            surplus: Vec::new(),
            diagnostics,
        }
    }

    /// Recommendation for a shortage, if one was computed.
    pub fn recommendation(&self, key: GapKey) -> Option<&GapRecommendation> {
        self.gap_recommendations.iter().find(|r| r.key == key)
    }

    /// Surplus entries of `day`.
    pub fn surplus_on(&self, day: usize) -> &[SurplusEntry] {
        self.surplus
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.entries.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortage(day: usize, window: CoverageWindow, count: u32) -> Shortage {
        Shortage {
            key: ShortageKey {
                day,
                position: 0,
                window,
            },
            day_label: "ראשון".to_string(),
            position_name: "Gate".to_string(),
            count,
        }
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(SolveStatus::ModelInvalid.as_str(), "MODEL_INVALID");
        assert_eq!(SolveStatus::NoEmployees.to_string(), "NO_EMPLOYEES");
        assert!(SolveStatus::Feasible.is_solved());
        assert!(!SolveStatus::Infeasible.is_solved());
    }

    #[test]
    fn test_shortage_summary() {
        let summary = ShortageSummary::new(vec![
            shortage(0, CoverageWindow::Morning, 2),
            shortage(0, CoverageWindow::Night, 1),
        ]);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.get(summary.iter().next().unwrap().key), Some(2));
        assert_eq!(summary.labels().get("ראשון|Gate|בוקר"), Some(&2));
    }

    #[test]
    fn test_shortage_row_display() {
        let row = RosterRow {
            day: 0,
            day_label: "ראשון".to_string(),
            position: "Gate".to_string(),
            shift_label: ShiftGroup::Night.display_label().to_string(),
            kind: RowKind::Shortage {
                group: ShiftGroup::Night,
                count: 2,
            },
        };

        assert!(row.is_shortage());
        assert_eq!(row.raw_shift(), SHORTAGE_MARKER);
        assert_eq!(row.employee_display(), "⚠️ חוסר (2)");
    }

    #[test]
    fn test_terminal_outcome_is_empty() {
        let outcome = RosterOutcome::terminal(SolveStatus::NoPositions, vec!["none".to_string()]);
        assert!(outcome.roster.is_empty());
        assert!(outcome.surplus_on(0).is_empty());
        assert!(outcome
            .recommendation(GapKey {
                day: 0,
                position: 0,
                group: ShiftGroup::Morning,
            })
            .is_none());
    }
}
