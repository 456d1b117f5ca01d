//! Small problems whose optimal rosters can be checked by hand.
//!
//! # Example
//!
//! ```
//! use rosterforge_test::scenarios::single_gate;
//!
//! let problem = single_gate();
//! assert_eq!(problem.employees.len(), 1);
//! assert_eq!(problem.positions[0].name, "Gate");
//! ```

use rosterforge_core::{Constraints, Employee, Position, RosterProblem};

/// Day used by the single-day scenarios.
pub const DAY: &str = "ראשון";

/// Second day of the two-day scenarios.
pub const NEXT_DAY: &str = "שני";

/// One position "Gate" needing one morning guard (priority 1), and "Dana",
/// available for the morning only. Doubles are disabled.
pub fn single_gate() -> RosterProblem {
    RosterProblem::new([DAY])
        .with_constraints(Constraints::default().with_doubles(false))
        .with_position(gate())
        .with_employee(
            Employee::new(1, "Dana")
                .with_roles("Gate")
                .with_cell(DAY, "בוקר"),
        )
}

/// [`single_gate`] where Dana declared no availability.
pub fn unstaffed_gate() -> RosterProblem {
    RosterProblem::new([DAY])
        .with_constraints(Constraints::default().with_doubles(false))
        .with_position(gate())
        .with_employee(Employee::new(1, "Dana").with_roles("Gate"))
}

/// Two days, back-to-back forbidden. "Night Gate" (priority 1) needs a
/// night guard, "Morning Gate" (priority 5) a morning guard. "Noa" can work
/// morning or night on day one and morning on day two.
///
/// The optimum puts Noa on the day-one night, which rests her on the
/// day-two morning.
pub fn back_to_back() -> RosterProblem {
    RosterProblem::new([DAY, NEXT_DAY])
        .with_constraints(Constraints::default().with_doubles(false))
        .with_position(
            Position::new("Night Gate")
                .with_guards(0, 0, 1)
                .with_priority(1),
        )
        .with_position(
            Position::new("Morning Gate")
                .with_guards(1, 0, 0)
                .with_priority(5),
        )
        .with_employee(
            Employee::new(1, "Noa")
                .with_roles("Gate")
                .with_cell(DAY, "morning, night")
                .with_cell(NEXT_DAY, "morning"),
        )
}

/// Two positions needing one morning guard each, priority 1 ("Gate") and
/// priority 5 ("Lobby"), and a single employee qualified for both.
pub fn competing_priorities() -> RosterProblem {
    RosterProblem::new([DAY])
        .with_constraints(Constraints::default().with_doubles(false))
        .with_position(
            Position::new("Lobby")
                .with_guards(1, 0, 0)
                .with_priority(5),
        )
        .with_position(gate())
        .with_employee(
            Employee::new(1, "Dana")
                .with_roles("all")
                .with_cell(DAY, "morning"),
        )
}

/// Auto-doubles on, but Dana's day-one override clears `Can_DM` while
/// keeping `M`. "Gate" needs a morning and an afternoon guard.
pub fn overridden_double() -> RosterProblem {
    RosterProblem::new([DAY, NEXT_DAY])
        .with_constraints(Constraints::default().with_auto_doubles(true))
        .with_position(
            Position::new("Gate")
                .with_guards(1, 1, 0)
                .with_priority(1),
        )
        .with_employee(
            Employee::new(1, "Dana")
                .with_roles("Gate")
                .with_cell(DAY, "morning")
                .with_cell(NEXT_DAY, "morning"),
        )
        .with_override(1, DAY, [true, false, false, false, false])
}

fn gate() -> Position {
    Position::new("Gate")
        .with_guards(1, 0, 0)
        .with_priority(1)
}
