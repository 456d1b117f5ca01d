//! Solver entry points that hide the backend wiring.

use rosterforge_config::RosterConfig;
use rosterforge_core::error::Result;
use rosterforge_core::{RosterOutcome, RosterProblem};
use rosterforge_solver::RosterSolver;

/// Configuration file read by [`solve_roster`].
pub const DEFAULT_CONFIG_PATH: &str = "roster.toml";

/// Solves `problem` with settings from `roster.toml`, or defaults when the
/// file is missing or invalid.
///
/// Only `[solver]` applies here: `problem` already carries its constraints
/// and reporting flags. Build it through [`RosterConfig::problem`] or
/// [`RosterConfig::problem_from_file`] to seed those from the file.
pub fn solve_roster(problem: &RosterProblem) -> Result<RosterOutcome> {
    let config = RosterConfig::load(DEFAULT_CONFIG_PATH).unwrap_or_default();
    solve_roster_with(&config, problem)
}

/// Solves `problem` with the default backend configured by `config`.
///
/// As with [`solve_roster`], only the `[solver]` settings are read.
pub fn solve_roster_with(config: &RosterConfig, problem: &RosterProblem) -> Result<RosterOutcome> {
    #[cfg(feature = "console")]
    rosterforge_console::init();

    RosterSolver::from_config(config).solve(problem)
}
