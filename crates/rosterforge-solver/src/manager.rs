//! Serialized roster generation over problem snapshots.
//!
//! Callers usually keep editable employee/position state behind their own
//! lock. [`RosterManager::generate`] takes a [`RosterProblem`] by value, so
//! the snapshot is fixed before model construction starts, and runs at most
//! one solve at a time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rosterforge_core::error::Result;
use rosterforge_core::{RosterOutcome, RosterProblem};
use tracing::debug;

use crate::backend::{MicroLpBackend, SolverBackend};
use crate::solver::RosterSolver;

/// Owns a solver and the latest outcome it produced.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{RosterProblem, SolveStatus};
/// use rosterforge_solver::RosterManager;
///
/// let manager = RosterManager::new();
/// assert!(manager.latest().is_none());
///
/// let outcome = manager.generate(RosterProblem::new(["Sun"])).unwrap();
/// assert_eq!(outcome.status, SolveStatus::NoEmployees);
/// assert_eq!(manager.generation(), 1);
/// ```
pub struct RosterManager<B = MicroLpBackend> {
    solver: RosterSolver<B>,
    generate_lock: Mutex<()>,
    latest: RwLock<Option<Arc<RosterOutcome>>>,
    generation: AtomicU64,
}

impl RosterManager<MicroLpBackend> {
    pub fn new() -> Self {
        Self::with_solver(RosterSolver::new())
    }
}

impl Default for RosterManager<MicroLpBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SolverBackend> RosterManager<B> {
    pub fn with_solver(solver: RosterSolver<B>) -> Self {
        Self {
            solver,
            generate_lock: Mutex::new(()),
            latest: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn solver(&self) -> &RosterSolver<B> {
        &self.solver
    }

    /// Solves `problem` and replaces the latest outcome.
    ///
    /// Concurrent calls queue behind one another. A failed validation
    /// leaves the previous outcome in place.
    pub fn generate(&self, problem: RosterProblem) -> Result<Arc<RosterOutcome>> {
        let _guard = self.generate_lock.lock();
        let outcome = Arc::new(self.solver.solve(&problem)?);

        *self.latest.write() = Some(Arc::clone(&outcome));
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(event = "roster_stored", generation, status = outcome.status.as_str());

        Ok(outcome)
    }

    /// The outcome of the most recent successful generate call.
    pub fn latest(&self) -> Option<Arc<RosterOutcome>> {
        self.latest.read().clone()
    }

    /// Number of outcomes stored so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Drops the stored outcome.
    pub fn clear(&self) {
        *self.latest.write() = None;
    }
}
