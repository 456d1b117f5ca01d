//! Builds a [`RosterModel`] from a [`RosterProblem`].

use std::collections::HashMap;

use rosterforge_core::{CoverageWindow, Position, RosterProblem, ShiftCode, ShortageKey};
use tracing::{debug, warn};

use super::{DecisionVar, LinearRow, Relation, RosterModel, RowFamily, SlackVar, SlotKey, Term};

/// Numerator of the slack penalty. Must stay large relative to
/// `MAX_PREFERENCE` so coverage always outranks preference.
pub const BASE_PENALTY: u32 = 10_000;

/// Penalty per unit of shortage for a window with the given priorities.
///
/// Lower priority numbers are more important and yield larger penalties.
///
/// ```
/// use rosterforge_solver::model::penalty;
///
/// assert_eq!(penalty(1, 1), 10_000);
/// assert_eq!(penalty(5, 1), 2_000);
/// assert_eq!(penalty(3, 3), 1_111);
/// assert_eq!(penalty(20_000, 1), 1);
/// ```
pub fn penalty(position_priority: u32, shift_priority: u32) -> i64 {
    let divisor = f64::from(position_priority.max(1)) * f64::from(shift_priority.max(1));
    let weight = (f64::from(BASE_PENALTY) / divisor).round() as i64;
    weight.max(1)
}

/// Translates a normalized problem into linear rows.
///
/// Building never fails: unstaffable windows simply end up with only a
/// slack variable in their coverage row.
pub struct ModelBuilder<'a> {
    problem: &'a RosterProblem,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(problem: &'a RosterProblem) -> Self {
        Self { problem }
    }

    pub fn build(self) -> RosterModel {
        let problem = self.problem;
        let day_count = problem.days.len();
        let allow_double = problem.constraints.allow_double;

        let mut decisions = Vec::new();
        let mut index = HashMap::new();
        let mut availability = Vec::with_capacity(problem.employees.len());
        let mut qualified = Vec::with_capacity(problem.employees.len());

        for (employee_index, employee) in problem.employees.iter().enumerate() {
            let week = problem.availability_of(employee);
            for &day in week.malformed_overrides() {
                warn!(
                    event = "override_ignored",
                    employee = %employee.id,
                    day = %problem.days[day],
                    "override column does not have five values; using raw availability",
                );
            }

            let roles = employee.role_set();
            let row: Vec<bool> = problem
                .positions
                .iter()
                .map(|p| roles.qualifies_for(&p.name))
                .collect();

            for (position_index, position) in problem.positions.iter().enumerate() {
                if !row[position_index] {
                    continue;
                }
                let preference = problem.preference(employee.id, &position.name);
                for day in 0..day_count {
                    let day_availability = week.day(day);
                    for shift in ShiftCode::ALL {
                        if !day_availability.permits(shift, allow_double)
                            || !is_staffed_by(position, shift)
                        {
                            continue;
                        }
                        let key = SlotKey {
                            employee: employee.id,
                            position: position_index,
                            day,
                            shift,
                        };
                        index.insert(key, decisions.len());
                        decisions.push(DecisionVar {
                            key,
                            employee_index,
                            preference,
                        });
                    }
                }
            }

            availability.push(week);
            qualified.push(row);
        }

        let mut model = RosterModel {
            decisions,
            slacks: Vec::new(),
            rows: Vec::new(),
            index,
            availability,
            qualified,
        };

        add_coverage_rows(&mut model, problem);
        let coverage = model.rows.len();
        add_one_shift_per_day_rows(&mut model, problem.employees.len(), day_count);
        let one_per_day = model.rows.len() - coverage;
        if problem.constraints.no_back_to_back {
            add_rest_rows(&mut model, problem.employees.len(), day_count);
        }
        let rest = model.rows.len() - coverage - one_per_day;

        debug!(
            event = "model_built",
            decisions = model.decisions.len(),
            slacks = model.slacks.len(),
            coverage_rows = coverage,
            one_per_day_rows = one_per_day,
            rest_rows = rest,
        );

        model
    }
}

/// Whether `shift` feeds a coverage row at `position`.
///
/// A variable outside every coverage row would only collect the
/// utilization bonus for a slot nobody asked to staff.
fn is_staffed_by(position: &Position, shift: ShiftCode) -> bool {
    CoverageWindow::ALL
        .into_iter()
        .any(|window| shift.covers(window) && position.requirement(window.group()) > 0)
}

fn add_coverage_rows(model: &mut RosterModel, problem: &RosterProblem) {
    // Decision indices per (position, day); keeps row building linear.
    let mut by_slot: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    for (i, var) in model.decisions.iter().enumerate() {
        by_slot
            .entry((var.key.position, var.key.day))
            .or_default()
            .push(i);
    }

    for (position_index, position) in problem.positions.iter().enumerate() {
        for day in 0..problem.days.len() {
            let slot_vars = by_slot.get(&(position_index, day));
            for window in CoverageWindow::ALL {
                let group = window.group();
                let requirement = position.requirement(group);
                if requirement == 0 {
                    continue;
                }

                let key = ShortageKey {
                    day,
                    position: position_index,
                    window,
                };
                let slack = model.slacks.len();
                model.slacks.push(SlackVar {
                    key,
                    upper: requirement,
                    penalty: penalty(position.priority, position.shift_priority(group)),
                });

                let mut terms: Vec<Term> = slot_vars
                    .into_iter()
                    .flatten()
                    .filter(|&&i| model.decisions[i].key.shift.covers(window))
                    .map(|&i| Term::Decision(i))
                    .collect();
                terms.push(Term::Slack(slack));

                model.rows.push(LinearRow {
                    family: RowFamily::Coverage(key),
                    terms,
                    relation: Relation::Equal,
                    rhs: requirement,
                });
            }
        }
    }
}

/// Decision indices per (employee, day), in model order.
fn by_employee_day(model: &RosterModel, employees: usize, days: usize) -> Vec<Vec<Vec<usize>>> {
    let mut grid = vec![vec![Vec::new(); days]; employees];
    for (i, var) in model.decisions.iter().enumerate() {
        grid[var.employee_index][var.key.day].push(i);
    }
    grid
}

fn add_one_shift_per_day_rows(model: &mut RosterModel, employees: usize, days: usize) {
    let grid = by_employee_day(model, employees, days);
    for (employee, per_day) in grid.into_iter().enumerate() {
        for (day, vars) in per_day.into_iter().enumerate() {
            if vars.is_empty() {
                continue;
            }
            model.rows.push(LinearRow {
                family: RowFamily::OneShiftPerDay { employee, day },
                terms: vars.into_iter().map(Term::Decision).collect(),
                relation: Relation::AtMost,
                rhs: 1,
            });
        }
    }
}

fn add_rest_rows(model: &mut RosterModel, employees: usize, days: usize) {
    let grid = by_employee_day(model, employees, days);
    for (employee, per_day) in grid.iter().enumerate() {
        for day in 0..days.saturating_sub(1) {
            let nights: Vec<Term> = per_day[day]
                .iter()
                .filter(|&&i| model.decisions[i].key.shift.ends_after_night())
                .map(|&i| Term::Decision(i))
                .collect();
            let mornings: Vec<Term> = per_day[day + 1]
                .iter()
                .filter(|&&i| model.decisions[i].key.shift.starts_in_morning())
                .map(|&i| Term::Decision(i))
                .collect();
            if nights.is_empty() || mornings.is_empty() {
                continue;
            }

            let mut terms = nights;
            terms.extend(mornings);
            model.rows.push(LinearRow {
                family: RowFamily::Rest { employee, day },
                terms,
                relation: Relation::AtMost,
                rhs: 1,
            });
        }
    }
}
