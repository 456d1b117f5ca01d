//! Gap-fill recommendations.
//!
//! Costs O(employees × shortages); only run when the problem asks for it.

use std::collections::BTreeMap;

use rosterforge_core::{GapKey, GapRecommendation, RosterProblem, ShiftGroup};

use super::WorkedShifts;
use crate::model::RosterModel;

pub(super) fn recommendations(
    problem: &RosterProblem,
    model: &RosterModel,
    worked: &WorkedShifts,
    gaps: &BTreeMap<GapKey, u32>,
) -> Vec<GapRecommendation> {
    gaps.keys()
        .map(|&key| recommend(problem, model, worked, key))
        .collect()
}

fn recommend(
    problem: &RosterProblem,
    model: &RosterModel,
    worked: &WorkedShifts,
    key: GapKey,
) -> GapRecommendation {
    let mut available = Vec::new();
    let mut potential = Vec::new();

    for (employee_index, employee) in problem.employees.iter().enumerate() {
        if !model.is_qualified(employee_index, key.position)
            || !worked.is_free(employee_index, key.day)
            || breaks_rest(problem, worked, employee_index, key)
        {
            continue;
        }

        let declared = model
            .availability(employee_index)
            .is_some_and(|week| week.day(key.day).has_plain(key.group));
        if declared {
            available.push(employee.name.clone());
        } else {
            potential.push(employee.name.clone());
        }
    }

    GapRecommendation {
        key,
        day_label: problem.days[key.day].clone(),
        position_name: problem.positions[key.position].name.clone(),
        available,
        potential,
    }
}

/// Whether covering `key` would put the employee on back-to-back shifts.
fn breaks_rest(problem: &RosterProblem, worked: &WorkedShifts, employee: usize, key: GapKey) -> bool {
    if !problem.constraints.no_back_to_back {
        return false;
    }
    match key.group {
        ShiftGroup::Morning => worked.worked_night_before(employee, key.day),
        ShiftGroup::Night => worked.works_morning_after(employee, key.day),
        ShiftGroup::Afternoon => false,
    }
}
