//! RosterForge Solver Engine
//!
//! This crate turns a [`RosterProblem`](rosterforge_core::RosterProblem)
//! into a roster:
//! - Model builder (decision variables, coverage rows with slack, rest rows)
//! - Solver backend seam with the good_lp/microlp default
//! - Result interpreter (assignments, shortages, gap-fill, surplus)
//! - `RosterSolver` and the serializing `RosterManager`

pub mod backend;
pub mod interpret;
pub mod manager;
pub mod model;
pub mod solver;

#[cfg(test)]
mod test_utils;

pub use backend::{
    BackendError, BackendSolution, MicroLpBackend, Optimality, SolveLimits, SolvedValues,
    SolverBackend,
};
pub use interpret::Interpreter;
pub use manager::RosterManager;
pub use model::{penalty, ModelBuilder, RosterModel, SlotKey, BASE_PENALTY};
pub use solver::RosterSolver;
