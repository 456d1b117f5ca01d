//! RosterForge Core - domain types for weekly shift rostering
//!
//! This crate provides the fundamental abstractions for RosterForge:
//! - Shift codes, shift groups and coverage windows
//! - Domain records (employees, positions, constraints, problem snapshot)
//! - Availability resolution and qualification matching
//! - Roster outcome types and the three-level roster score

pub mod domain;
pub mod error;
pub mod roster;
pub mod score;
pub mod shift;

pub use domain::{
    Constraints, DayAvailability, Employee, EmployeeId, Position, RoleSet, RosterProblem,
    WeeklyAvailability,
};
pub use error::RosterError;
pub use roster::{
    Assignment, DaySurplus, GapKey, GapRecommendation, RosterOutcome, RosterRow, RowKind,
    Shortage, ShortageKey, ShortageSummary, SolveStatus, SurplusEntry,
};
pub use score::RosterScore;
pub use shift::{CoverageWindow, ShiftCode, ShiftGroup};
