//! Assignment extraction and score breakdown.

use rosterforge_core::{Assignment, RosterProblem, RosterRow, RosterScore, RowKind};

use crate::backend::SolvedValues;
use crate::model::RosterModel;

/// One assignment per decision variable solved to 1, in model order.
pub(super) fn assignments(
    problem: &RosterProblem,
    model: &RosterModel,
    values: &SolvedValues,
) -> Vec<Assignment> {
    model
        .decisions()
        .iter()
        .zip(&values.decisions)
        .filter(|(_, &on)| on)
        .map(|(var, _)| {
            let key = var.key;
            Assignment {
                employee: key.employee,
                employee_name: problem.employees[var.employee_index].name.clone(),
                position: key.position,
                position_name: problem.positions[key.position].name.clone(),
                day: key.day,
                day_label: problem.days[key.day].clone(),
                shift: key.shift,
            }
        })
        .collect()
}

pub(super) fn assignment_rows(assignments: &[Assignment]) -> Vec<RosterRow> {
    assignments
        .iter()
        .map(|a| RosterRow {
            day: a.day,
            day_label: a.day_label.clone(),
            position: a.position_name.clone(),
            shift_label: a.shift.display_label().to_string(),
            kind: RowKind::Assigned {
                shift: a.shift,
                employee: a.employee_name.clone(),
            },
        })
        .collect()
}

/// Splits the solved objective into its three tiers.
pub(super) fn score(model: &RosterModel, values: &SolvedValues) -> RosterScore {
    let mut assigned = 0;
    let mut preference = 0;
    for (var, _) in model
        .decisions()
        .iter()
        .zip(&values.decisions)
        .filter(|(_, &on)| on)
    {
        assigned += 1;
        preference += i64::from(var.preference);
    }

    let shortage: i64 = model
        .slacks()
        .iter()
        .zip(&values.slacks)
        .map(|(slack, &count)| slack.coefficient() * i64::from(count))
        .sum();

    RosterScore::of(shortage, assigned, preference)
}
