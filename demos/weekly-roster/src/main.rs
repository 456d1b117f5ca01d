//! Weekly roster demo.
//!
//! Usage: `weekly-roster [problem.yaml|problem.json]`
//!
//! Without an argument the built-in demo week is solved. `roster.toml`
//! (from the working directory, else this demo's own copy) supplies the
//! constraints and reporting defaults; a problem file may override single
//! constraint keys. The outcome is printed to stdout as JSON.

use std::error::Error;
use std::path::{Path, PathBuf};

use rosterforge::prelude::*;
use rosterforge::DEFAULT_CONFIG_PATH;
use rosterforge_test::week::demo_week;

fn load_config() -> RosterConfig {
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
    [PathBuf::from(DEFAULT_CONFIG_PATH), bundled]
        .iter()
        .find_map(|path| RosterConfig::load(path).ok())
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn Error>> {
    rosterforge::console::init();

    let config = load_config();
    let problem = match std::env::args().nth(1) {
        Some(path) => config.problem_from_file(path)?,
        None => RosterProblem {
            constraints: config.constraints,
            calc_potentials: config.report.calc_potentials,
            ..demo_week()
        },
    };

    let outcome = solve_roster_with(&config, &problem)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/two-days.yaml")
    }

    #[test]
    fn test_bundled_config_seeds_sample_problem() {
        let config = load_config();
        assert!(config.constraints.auto_doubles);
        assert!(config.report.calc_potentials);

        let problem = config.problem_from_file(sample()).unwrap();
        assert_eq!(problem.constraints, config.constraints);
        assert!(problem.calc_potentials);
        assert_eq!(problem.employees.len(), 4);
    }

    #[test]
    fn test_config_changes_reach_sample_problem() {
        let config = load_config().with_constraints(
            load_config().constraints.with_back_to_back_forbidden(false),
        );
        let problem = config.problem_from_file(sample()).unwrap();
        assert!(!problem.constraints.no_back_to_back);
    }
}
