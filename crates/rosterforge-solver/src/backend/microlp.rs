//! Default backend: good_lp driving the pure-Rust microlp solver.

use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use tracing::debug;

use super::{BackendError, BackendSolution, Optimality, SolveLimits, SolvedValues, SolverBackend};
use crate::model::{Relation, RosterModel, Term};

/// Solves roster models with microlp through good_lp.
///
/// microlp has no time limit support, so every answer is proven optimal
/// and [`SolveLimits::time_limit`] is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpBackend;

impl MicroLpBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for MicroLpBackend {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &RosterModel, limits: &SolveLimits) -> Result<BackendSolution, BackendError> {
        if model.is_empty() {
            return Ok(BackendSolution {
                optimality: Optimality::Optimal,
                values: SolvedValues::default(),
            });
        }
        if let Some(limit) = limits.time_limit {
            debug!(
                event = "time_limit_ignored",
                backend = self.name(),
                time_limit_secs = limit.as_secs(),
            );
        }

        let mut vars = ProblemVariables::new();
        let decisions: Vec<Variable> = model
            .decisions()
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();
        let slacks: Vec<Variable> = model
            .slacks()
            .iter()
            .map(|s| vars.add(variable().integer().min(0).max(s.upper)))
            .collect();

        let mut objective = Expression::from(0.0);
        for (var, decision) in decisions.iter().zip(model.decisions()) {
            objective.add_mul(decision.coefficient() as f64, *var);
        }
        for (var, slack) in slacks.iter().zip(model.slacks()) {
            objective.add_mul(slack.coefficient() as f64, *var);
        }

        let mut problem = vars.maximise(objective).using(microlp);
        for row in model.rows() {
            let lhs: Expression = row
                .terms
                .iter()
                .map(|term| match *term {
                    Term::Decision(i) => decisions[i],
                    Term::Slack(i) => slacks[i],
                })
                .sum();
            let rhs = f64::from(row.rhs);
            match row.relation {
                Relation::Equal => problem.add_constraint(constraint!(lhs == rhs)),
                Relation::AtMost => problem.add_constraint(constraint!(lhs <= rhs)),
            };
        }

        let solution = problem.solve().map_err(|err| match err {
            ResolutionError::Infeasible => BackendError::Infeasible,
            ResolutionError::Unbounded => BackendError::Unbounded,
            other => BackendError::Other(other.to_string()),
        })?;

        let values = SolvedValues::new(
            decisions.iter().map(|&v| solution.value(v) > 0.5).collect(),
            slacks
                .iter()
                .map(|&v| solution.value(v).round().max(0.0) as u32)
                .collect(),
        );

        Ok(BackendSolution {
            optimality: Optimality::Optimal,
            values,
        })
    }
}
