//! Result interpretation: turns solved values back into a roster.
//!
//! Interpretation is a pure function of the problem, the model and the
//! solved values; running it twice yields identical outcomes.

mod extract;
mod recommend;
mod shortage;
mod surplus;


use rosterforge_core::error::{Result, RosterError};
use rosterforge_core::{RosterOutcome, RosterProblem, ShiftCode, SolveStatus};

use crate::backend::SolvedValues;
use crate::model::RosterModel;

/// Diagnostic appended when the backend stopped at a limit.
pub const NOT_PROVEN_OPTIMAL: &str = "הפתרון לא הוכח כאופטימלי; ייתכן שקיים סידור טוב יותר";

/// Builds [`RosterOutcome`]s from solved values.
pub struct Interpreter<'a> {
    problem: &'a RosterProblem,
    model: &'a RosterModel,
}

impl<'a> Interpreter<'a> {
    /// `problem` must be the normalized problem `model` was built from.
    pub fn new(problem: &'a RosterProblem, model: &'a RosterModel) -> Self {
        Self { problem, model }
    }

    /// Interprets `values` for a solved `status`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Internal`] if `values` does not match the
    /// model's shape or violates one of its rows.
    pub fn interpret(&self, status: SolveStatus, values: &SolvedValues) -> Result<RosterOutcome> {
        if !values.fits(self.model) {
            return Err(RosterError::Internal(format!(
                "solved values have {} decisions and {} slacks, model has {} and {}",
                values.decisions.len(),
                values.slacks.len(),
                self.model.decisions().len(),
                self.model.slacks().len(),
            )));
        }
        if let Some(row) = self
            .model
            .rows()
            .iter()
            .find(|row| !row.is_satisfied(&values.decisions, &values.slacks))
        {
            return Err(RosterError::Internal(format!(
                "solved values violate {:?}",
                row.family
            )));
        }

        let worked = WorkedShifts::new(self.problem, self.model, values);
        let assignments = extract::assignments(self.problem, self.model, values);
        let score = extract::score(self.model, values);
        let shortages = shortage::summarize(self.problem, self.model, values);

        let mut diagnostics = shortage::diagnostics(&shortages);
        if status == SolveStatus::Feasible {
            diagnostics.push(NOT_PROVEN_OPTIMAL.to_string());
        }

        let gaps = shortage::collapse(&shortages);
        let mut roster = extract::assignment_rows(&assignments);
        roster.extend(shortage::rows(self.problem, &gaps));
        sort_rows(&mut roster);

        let gap_recommendations = if self.problem.calc_potentials {
            recommend::recommendations(self.problem, self.model, &worked, &gaps)
        } else {
            Vec::new()
        };
        let surplus = surplus::report(self.problem, self.model, &worked);

        Ok(RosterOutcome {
            status,
            score: Some(score),
            assignments,
            roster,
            shortages,
            gap_recommendations,
            surplus,
            diagnostics,
        })
    }
}

/// Day order, then position name, then shift label. Stable, so rows that
/// tie keep model order.
fn sort_rows(rows: &mut [rosterforge_core::RosterRow]) {
    rows.sort_by(|a, b| {
        (a.day, &a.position, &a.shift_label).cmp(&(b.day, &b.position, &b.shift_label))
    });
}

/// The shift each employee works on each day.
pub(crate) struct WorkedShifts {
    shifts: Vec<Vec<Option<ShiftCode>>>,
}

impl WorkedShifts {
    fn new(problem: &RosterProblem, model: &RosterModel, values: &SolvedValues) -> Self {
        let mut shifts = vec![vec![None; problem.days.len()]; problem.employees.len()];
        for (var, _) in model
            .decisions()
            .iter()
            .zip(&values.decisions)
            .filter(|(_, &on)| on)
        {
            shifts[var.employee_index][var.key.day] = Some(var.key.shift);
        }
        Self { shifts }
    }

    /// Shift worked by `employee` on `day`; out-of-range days are free.
    pub(crate) fn on(&self, employee: usize, day: usize) -> Option<ShiftCode> {
        self.shifts
            .get(employee)
            .and_then(|days| days.get(day))
            .copied()
            .flatten()
    }

    pub(crate) fn is_free(&self, employee: usize, day: usize) -> bool {
        self.on(employee, day).is_none()
    }

    /// Whether `employee` worked through the night before `day`.
    pub(crate) fn worked_night_before(&self, employee: usize, day: usize) -> bool {
        day > 0
            && self
                .on(employee, day - 1)
                .is_some_and(ShiftCode::ends_after_night)
    }

    /// Whether `employee` starts at the morning boundary the day after `day`.
    pub(crate) fn works_morning_after(&self, employee: usize, day: usize) -> bool {
        self.on(employee, day + 1)
            .is_some_and(ShiftCode::starts_in_morning)
    }
}
