//! RosterForge - weekly shift rostering in Rust
//!
//! Describe employees, positions and availability, then call
//! [`solve_roster`] for a roster with shortage and surplus reports.
//!
//! # Example
//!
//! ```rust
//! use rosterforge::prelude::*;
//!
//! let problem = RosterProblem::new(["Sunday"])
//!     .with_position(Position::new("Gate").with_guards(1, 0, 0))
//!     .with_employee(Employee::new(1, "Dana").with_roles("Gate").with_cell("Sunday", "morning"));
//!
//! let outcome = solve_roster_with(&RosterConfig::default(), &problem).unwrap();
//! assert_eq!(outcome.status, SolveStatus::Optimal);
//! assert_eq!(outcome.assignments.len(), 1);
//! ```

// Domain and result types
pub use rosterforge_core::{
    Assignment, Constraints, CoverageWindow, DayAvailability, DaySurplus, Employee, EmployeeId,
    GapKey, GapRecommendation, Position, RoleSet, RosterError, RosterOutcome, RosterProblem,
    RosterRow, RosterScore, RowKind, ShiftCode, ShiftGroup, Shortage, ShortageKey,
    ShortageSummary, SolveStatus, SurplusEntry, WeeklyAvailability,
};

// Configuration
pub use rosterforge_config::{ConfigError, ReportSettings, RosterConfig, SolverSettings};

// Engine
pub use rosterforge_solver::{
    BackendError, BackendSolution, MicroLpBackend, Optimality, RosterManager, RosterSolver,
    SolveLimits, SolvedValues, SolverBackend, BASE_PENALTY,
};

#[cfg(feature = "console")]
pub use rosterforge_console as console;

mod solver;
pub use solver::{solve_roster, solve_roster_with, DEFAULT_CONFIG_PATH};


pub mod prelude {
    pub use super::{solve_roster, solve_roster_with};
    pub use super::{Constraints, Employee, Position, RosterConfig, RosterProblem};
    pub use super::{RosterManager, RosterOutcome, RosterScore, RosterSolver, SolveStatus};
    pub use super::{ShiftCode, ShiftGroup};
}
