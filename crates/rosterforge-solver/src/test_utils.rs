//! Test utilities for rosterforge-solver
//!
//! Provides a scripted backend so solver and manager tests can exercise
//! every status path without a real MILP solve.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{
    BackendError, BackendSolution, Optimality, SolveLimits, SolvedValues, SolverBackend,
};
use crate::model::RosterModel;

// Re-export problem fixtures from rosterforge-test
pub use rosterforge_test::scenarios::{back_to_back, single_gate, unstaffed_gate};

/// What a [`ScriptedBackend`] answers.
#[derive(Debug, Clone)]
pub enum Script {
    /// Leave everyone home; every slack at its bound.
    EmptyRoster(Optimality),
    /// Fail with the given error.
    Fail(BackendError),
    /// Return values that do not fit the model.
    Malformed,
}

/// A backend that answers from a script and counts its calls.
#[derive(Debug)]
pub struct ScriptedBackend {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SolverBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn solve(&self, model: &RosterModel, _limits: &SolveLimits) -> Result<BackendSolution, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::EmptyRoster(optimality) => Ok(BackendSolution {
                optimality: *optimality,
                values: SolvedValues::empty_roster(model),
            }),
            Script::Fail(err) => Err(err.clone()),
            Script::Malformed => Ok(BackendSolution {
                optimality: Optimality::Optimal,
                values: SolvedValues::new(vec![true; model.decisions().len() + 1], Vec::new()),
            }),
        }
    }
}
