//! Available-but-unassigned report.

use rosterforge_core::{DaySurplus, RosterProblem, ShiftGroup, SurplusEntry};

use super::WorkedShifts;
use crate::model::RosterModel;

/// Days with at least one surplus employee, in day order.
///
/// Counts plain availability (M/A/N) only. When back-to-back shifts are
/// forbidden, morning availability after a worked night is not surplus.
pub(super) fn report(
    problem: &RosterProblem,
    model: &RosterModel,
    worked: &WorkedShifts,
) -> Vec<DaySurplus> {
    let rest_rule = problem.constraints.no_back_to_back;

    (0..problem.days.len())
        .filter_map(|day| {
            let entries: Vec<SurplusEntry> = problem
                .employees
                .iter()
                .enumerate()
                .filter(|&(employee_index, _)| worked.is_free(employee_index, day))
                .filter_map(|(employee_index, employee)| {
                    let declared = model.availability(employee_index)?.day(day);
                    let blocked_morning = rest_rule && worked.worked_night_before(employee_index, day);
                    let shifts: Vec<ShiftGroup> = declared
                        .plain_groups()
                        .filter(|&g| !(blocked_morning && g == ShiftGroup::Morning))
                        .collect();
                    if shifts.is_empty() {
                        return None;
                    }
                    Some(SurplusEntry {
                        employee: employee.id,
                        name: employee.name.clone(),
                        shifts,
                    })
                })
                .collect();

            (!entries.is_empty()).then(|| DaySurplus {
                day,
                day_label: problem.days[day].clone(),
                entries,
            })
        })
        .collect()
}
