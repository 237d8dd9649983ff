//! Aggregating validation runs
//!
//! A [`GuardManager`] holds independent validation units and runs them all,
//! collecting every failure instead of stopping at the first. This is the
//! one place in the crate where guard failures are caught and re-homed:
//! either returned as an ordered list (collect mode) or combined into a
//! single aggregate failure (strict mode).

use crate::core::error::{GuardError, GuardResult};

/// A validation unit: produces zero or one [`GuardError`] when evaluated.
///
/// Any `Fn() -> GuardResult<()>` closure is a clause, so atomic guards,
/// fluent chains, and ad-hoc checks can all be added to a manager:
///
/// ```
/// use orion_guard::core::manager::GuardManager;
/// use orion_guard::guards::string;
///
/// let failures = GuardManager::new()
///     .add(|| string::not_empty("ada", "name"))
///     .add(|| string::length("ada", 1, 10, "name"))
///     .collect();
/// assert!(failures.is_empty());
/// ```
pub trait GuardClause {
    /// Runs the check.
    fn evaluate(&self) -> GuardResult<()>;
}

impl<F> GuardClause for F
where
    F: Fn() -> GuardResult<()>,
{
    fn evaluate(&self) -> GuardResult<()> {
        self()
    }
}

/// Runs a batch of validation units, reporting every failure together.
///
/// Units run in registration order and a failing unit never aborts the
/// batch. Use [`collect`](GuardManager::collect) to inspect the failures
/// yourself, or [`execute`](GuardManager::execute) to fail on any violation
/// with one combined error.
#[derive(Default)]
pub struct GuardManager {
    clauses: Vec<Box<dyn GuardClause>>,
}

impl GuardManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validation unit, builder-style.
    #[must_use]
    pub fn add(mut self, clause: impl GuardClause + 'static) -> Self {
        self.clauses.push(Box::new(clause));
        self
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no units are registered.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Runs every unit and returns the failures, in registration order.
    ///
    /// An empty vec means all checks passed.
    pub fn collect(&self) -> Vec<GuardError> {
        self.clauses
            .iter()
            .filter_map(|clause| clause.evaluate().err())
            .collect()
    }

    /// Runs every unit; if any failed, returns one [`Aggregate`] error
    /// carrying the full ordered failure list as its causes.
    ///
    /// [`Aggregate`]: crate::core::error::GuardErrorKind::Aggregate
    pub fn execute(&self) -> GuardResult<()> {
        let failures = self.collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(GuardError::aggregate(failures))
        }
    }
}

impl std::fmt::Debug for GuardManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardManager")
            .field("clauses", &self.clauses.len())
            .finish()
    }
}
