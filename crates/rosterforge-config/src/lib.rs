//! Configuration system for RosterForge.
//!
//! Load roster defaults from TOML or YAML files to control rest rules,
//! double shifts, solver limits and reporting without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use rosterforge_config::RosterConfig;
//! use std::time::Duration;
//!
//! let config = RosterConfig::from_toml_str(r#"
//!     [constraints]
//!     no_back_to_back = false
//!     auto_doubles = true
//!
//!     [solver]
//!     time_limit_secs = 10
//! "#).unwrap();
//!
//! assert!(!config.constraints.no_back_to_back);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rosterforge_config::RosterConfig;
//!
//! let config = RosterConfig::load("roster.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use rosterforge_core::{Constraints, RosterProblem};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main roster configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RosterConfig {
    /// Default scheduling rules for new problems.
    pub constraints: Constraints,

    /// Solver backend settings.
    pub solver: SolverSettings,

    /// Post-solve reporting settings.
    pub report: ReportSettings,
}

impl RosterConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks settings that the engine cannot honour.
    ///
    /// Overlap prevention is structural (one shift per employee per day) and
    /// cannot be switched off.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.constraints.no_overlap {
            return Err(ConfigError::Invalid(
                "constraints.no_overlap cannot be disabled".to_string(),
            ));
        }
        if self.solver.time_limit_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "solver.time_limit_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the default constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the solver time limit.
    pub fn with_time_limit_secs(mut self, seconds: u64) -> Self {
        self.solver.time_limit_secs = Some(seconds);
        self
    }

    /// Enables or disables gap-fill recommendations by default.
    pub fn with_calc_potentials(mut self, calc_potentials: bool) -> Self {
        self.report.calc_potentials = calc_potentials;
        self
    }

    /// Returns the solver time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.solver.time_limit_secs.map(Duration::from_secs)
    }

    /// Starts a problem over `days` seeded with these defaults.
    pub fn problem<I, S>(&self, days: I) -> RosterProblem
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RosterProblem::new(days)
            .with_constraints(self.constraints)
            .with_calc_potentials(self.report.calc_potentials)
    }

    /// Loads a problem document (YAML, or JSON as a YAML subset) seeded
    /// with these defaults.
    pub fn problem_from_file(&self, path: impl AsRef<Path>) -> Result<RosterProblem, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        self.problem_from_yaml_str(&contents)
    }

    /// Parses a problem document seeded with these defaults.
    ///
    /// Constraint keys the document sets override the configured
    /// constraints; the rest keep their configured values. A missing
    /// `calc_potentials` comes from `[report]`.
    pub fn problem_from_yaml_str(&self, s: &str) -> Result<RosterProblem, ConfigError> {
        let mut document: serde_yaml::Value = serde_yaml::from_str(s)?;
        let fields = document
            .as_mapping_mut()
            .ok_or_else(|| ConfigError::Invalid("problem document must be a mapping".to_string()))?;

        let mut constraints = serde_yaml::to_value(self.constraints)?;
        if let (Some(merged), Some(given)) = (
            constraints.as_mapping_mut(),
            fields.get("constraints").and_then(serde_yaml::Value::as_mapping),
        ) {
            for (key, value) in given {
                merged.insert(key.clone(), value.clone());
            }
        }
        fields.insert("constraints".into(), constraints);
        if !fields.contains_key("calc_potentials") {
            fields.insert("calc_potentials".into(), self.report.calc_potentials.into());
        }

        Ok(serde_yaml::from_value(document)?)
    }
}

/// Solver backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverSettings {
    /// Maximum seconds a backend may spend; backends without limit support
    /// ignore it.
    pub time_limit_secs: Option<u64>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: Some(30),
        }
    }
}

/// Post-solve reporting settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReportSettings {
    /// Compute gap-fill recommendations for shortages.
    pub calc_potentials: bool,
}
