//! The seam between the model and a solver library.

mod microlp;

pub use microlp::MicroLpBackend;

use std::time::Duration;

use rosterforge_core::SolveStatus;
use thiserror::Error;

use crate::model::RosterModel;

/// Limits passed to every backend call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveLimits {
    /// Wall-clock budget; `None` means unlimited.
    pub time_limit: Option<Duration>,
}

impl SolveLimits {
    pub fn with_time_limit(time_limit: Option<Duration>) -> Self {
        Self { time_limit }
    }
}

/// How good a returned assignment is known to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimality {
    /// Proven optimal.
    Optimal,
    /// Valid, but the backend stopped at a limit before proving optimality.
    Feasible,
}

impl Optimality {
    pub fn status(self) -> SolveStatus {
        match self {
            Optimality::Optimal => SolveStatus::Optimal,
            Optimality::Feasible => SolveStatus::Feasible,
        }
    }
}

/// Solved values, indexed like [`RosterModel::decisions`] and
/// [`RosterModel::slacks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolvedValues {
    pub decisions: Vec<bool>,
    pub slacks: Vec<u32>,
}

impl SolvedValues {
    pub fn new(decisions: Vec<bool>, slacks: Vec<u32>) -> Self {
        Self { decisions, slacks }
    }

    /// All decisions off and every slack at its bound: a valid (if poor)
    /// assignment of any model.
    pub fn empty_roster(model: &RosterModel) -> Self {
        Self {
            decisions: vec![false; model.decisions().len()],
            slacks: model.slacks().iter().map(|s| s.upper).collect(),
        }
    }

    /// Whether the vector lengths match `model`.
    pub fn fits(&self, model: &RosterModel) -> bool {
        self.decisions.len() == model.decisions().len() && self.slacks.len() == model.slacks().len()
    }
}

/// A backend answer with a usable assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSolution {
    pub optimality: Optimality,
    pub values: SolvedValues,
}

/// A backend answer without a usable assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("the roster model is infeasible")]
    Infeasible,

    #[error("the roster model is unbounded")]
    Unbounded,

    #[error("solver backend failed: {0}")]
    Other(String),
}

impl BackendError {
    /// Terminal status reported for this failure.
    pub fn status(&self) -> SolveStatus {
        match self {
            BackendError::Infeasible => SolveStatus::Infeasible,
            BackendError::Unbounded => SolveStatus::ModelInvalid,
            BackendError::Other(_) => SolveStatus::Unknown,
        }
    }
}

/// A MILP solver able to maximise a [`RosterModel`].
///
/// Implementations must return values that satisfy every row of the model;
/// the interpreter treats anything else as an internal error.
pub trait SolverBackend: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn solve(&self, model: &RosterModel, limits: &SolveLimits) -> Result<BackendSolution, BackendError>;
}

impl<B: SolverBackend + ?Sized> SolverBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, model: &RosterModel, limits: &SolveLimits) -> Result<BackendSolution, BackendError> {
        (**self).solve(model, limits)
    }
}
