//! Domain records consumed by the roster engine.
//!
//! Inputs arrive from ingestion/UI collaborators as loosely shaped rows and
//! are turned into these validated records before model construction:
//!
//! - [`Employee`]: identity, role list and raw per-day availability cells
//! - [`Position`]: staffing requirements and priorities per shift group
//! - [`Constraints`]: global rest/overlap/double-shift policy
//! - [`RosterProblem`]: immutable snapshot handed to the solver
//!
//! The [`availability`] and [`qualification`] modules turn employee rows
//! into the per-day shift sets and position eligibility the model needs.

pub mod availability;
mod constraints;
mod employee;
mod position;
mod problem;
pub mod qualification;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilityFlag, DayAvailability, DoublePolicy, WeeklyAvailability};
pub use constraints::Constraints;
pub use employee::{Employee, EmployeeId};
pub use position::{Position, DEFAULT_POSITION_PRIORITY, DEFAULT_SHIFT_PRIORITY};
pub use problem::{DayOverrides, RosterProblem, MAX_PREFERENCE};
pub use qualification::RoleSet;
