//! A deterministic full-week problem.
//!
//! Three positions, ten employees and seven days, with availability drawn
//! from a fixed rotation so every run sees the same input.

use rosterforge_core::{Constraints, Employee, Position, RosterProblem};

/// Sunday to Saturday.
pub const WEEK_DAYS: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];

const NAMES: [&str; 10] = [
    "Dana", "Noa", "Yossi", "Avi", "Tamar", "Omer", "Lior", "Maya", "Eitan", "Shira",
];

const ROLES: [&str; 5] = ["all", "שער ראשי", "לובי, סיור", "שער", "סיור"];

const CELLS: [&str; 6] = [
    "בוקר",
    "צהריים",
    "לילה",
    "בוקר, צהריים",
    "afternoon / night",
    "morning, afternoon, night",
];

/// Builds the demo week.
///
/// ```
/// use rosterforge_test::week::{demo_week, WEEK_DAYS};
///
/// let problem = demo_week();
/// assert_eq!(problem.days.len(), WEEK_DAYS.len());
/// assert_eq!(problem.employees.len(), 10);
/// assert!(problem.validate().is_ok());
/// ```
pub fn demo_week() -> RosterProblem {
    let mut problem = RosterProblem::new(WEEK_DAYS)
        .with_constraints(Constraints::default().with_auto_doubles(true))
        .with_calc_potentials(true)
        .with_position(
            Position::new("שער ראשי")
                .with_guards(1, 1, 1)
                .with_priority(1),
        )
        .with_position(
            Position::new("לובי")
                .with_guards(1, 1, 0)
                .with_priority(3)
                .with_shift_priorities(1, 2, 1),
        )
        .with_position(
            Position::new("סיור")
                .with_guards(0, 1, 1)
                .with_priority(5)
                .with_shift_priorities(1, 3, 2),
        );

    for (i, name) in NAMES.iter().enumerate() {
        let id = i as u32 + 1;
        let mut employee = Employee::new(id, *name)
            .with_roles(ROLES[i % ROLES.len()])
            .with_may_double(id % 4 != 0);
        for (d, day) in WEEK_DAYS.iter().enumerate() {
            if (i + d) % 7 == 0 {
                continue;
            }
            employee = employee.with_cell(*day, CELLS[(i * 3 + d) % CELLS.len()]);
        }
        problem = problem.with_employee(employee);
    }

    problem
        .with_preference(1, "שער ראשי", 8)
        .with_preference(3, "סיור", 10)
        .with_preference(5, "לובי", 4)
        .with_override(2, "שישי", [false, false, true, false, true])
}
