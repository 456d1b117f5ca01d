//! RosterSolver: build, solve and interpret one roster problem.

use std::time::{Duration, Instant};

use rosterforge_config::RosterConfig;
use rosterforge_core::error::Result;
use rosterforge_core::{RosterOutcome, RosterProblem, SolveStatus};
use tracing::{info, warn};

use crate::backend::{MicroLpBackend, SolveLimits, SolverBackend};
use crate::interpret::Interpreter;
use crate::model::ModelBuilder;

/// Runs the build → solve → interpret pipeline against one backend.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{Employee, Position, RosterProblem, SolveStatus};
/// use rosterforge_solver::RosterSolver;
///
/// let problem = RosterProblem::new(["Sun"])
///     .with_employee(Employee::new(1, "Dana").with_roles("Gate").with_cell("Sun", "morning"))
///     .with_position(Position::new("Gate").with_guards(1, 0, 0).with_priority(1));
///
/// let outcome = RosterSolver::new().solve(&problem).unwrap();
/// assert_eq!(outcome.status, SolveStatus::Optimal);
/// assert_eq!(outcome.assignments.len(), 1);
/// assert!(outcome.shortages.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RosterSolver<B = MicroLpBackend> {
    backend: B,
    limits: SolveLimits,
}

impl RosterSolver<MicroLpBackend> {
    /// A solver on the default backend with no time limit.
    pub fn new() -> Self {
        Self::with_backend(MicroLpBackend::new())
    }

    /// A solver on the default backend with limits from `config`.
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new().with_time_limit(config.time_limit())
    }
}

impl Default for RosterSolver<MicroLpBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SolverBackend> RosterSolver<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            limits: SolveLimits::default(),
        }
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.limits = SolveLimits::with_time_limit(time_limit);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn limits(&self) -> SolveLimits {
        self.limits
    }

    /// Solves `problem`.
    ///
    /// Empty employee or position lists and backend failures come back as
    /// terminal outcomes, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DomainModel`] if `problem` fails validation and
    /// [`RosterError::Internal`] if the backend returns values that break
    /// the model.
    ///
    /// [`RosterError::DomainModel`]: rosterforge_core::RosterError::DomainModel
    /// [`RosterError::Internal`]: rosterforge_core::RosterError::Internal
    pub fn solve(&self, problem: &RosterProblem) -> Result<RosterOutcome> {
        problem.validate()?;
        if problem.employees.is_empty() {
            return Ok(RosterOutcome::terminal(
                SolveStatus::NoEmployees,
                vec!["no employees to schedule".to_string()],
            ));
        }
        if problem.positions.is_empty() {
            return Ok(RosterOutcome::terminal(
                SolveStatus::NoPositions,
                vec!["no positions to staff".to_string()],
            ));
        }

        let problem = problem.normalized();
        let model = ModelBuilder::new(&problem).build();

        info!(
            event = "solve_start",
            backend = self.backend.name(),
            employees = problem.employees.len(),
            positions = problem.positions.len(),
            days = problem.days.len(),
            variables = model.variable_count(),
            constraints = model.rows().len(),
            time_limit_secs = self.limits.time_limit.map_or(0, |t| t.as_secs()),
        );
        let started = Instant::now();

        let solution = match self.backend.solve(&model, &self.limits) {
            Ok(solution) => solution,
            Err(err) => {
                let status = err.status();
                warn!(event = "solve_failed", status = status.as_str(), error = %err);
                info!(
                    event = "solve_end",
                    status = status.as_str(),
                    duration_ms = started.elapsed().as_millis() as u64,
                );
                return Ok(RosterOutcome::terminal(status, vec![err.to_string()]));
            }
        };

        let status = solution.optimality.status();
        if status != SolveStatus::Optimal {
            warn!(event = "not_proven_optimal", status = status.as_str());
        }

        let outcome = Interpreter::new(&problem, &model).interpret(status, &solution.values)?;

        info!(
            event = "solve_end",
            status = status.as_str(),
            score = %outcome.score.unwrap_or_default(),
            assignments = outcome.assignments.len(),
            shortages = outcome.shortages.total(),
            duration_ms = started.elapsed().as_millis() as u64,
        );
        Ok(outcome)
    }
}
