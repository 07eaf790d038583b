//! Append-only offense accumulator used during a run.

use crate::offense::Offense;
use crate::severity::Severity;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Accumulates offenses in the order they are recorded.
///
/// Recording always succeeds and never deduplicates: two rules flagging the
/// same node produce two offenses. The sink is `Sync`, so rules running on
/// separate threads may share one, although the engine gives every run its own.
pub struct OffenseSink {
    offenses: Mutex<Vec<Offense>>,
}

impl OffenseSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            offenses: Mutex::new(Vec::new()),
        }
    }

    /// Appends an offense.
    pub fn record(&self, offense: Offense) {
        self.lock().push(offense);
    }

    /// Returns how many recorded offenses are at `severity` or above.
    pub fn count_at_least(&self, severity: Severity) -> usize {
        self.lock()
            .iter()
            .filter(|offense| offense.severity >= severity)
            .count()
    }

    /// Returns the number of recorded offenses.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Takes all recorded offenses, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Offense> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a snapshot of all recorded offenses without draining.
    pub fn results(&self) -> Vec<Offense> {
        self.lock().clone()
    }

    // Every critical section is a single push or take, so a poisoned lock
    // still guards a consistent vector.
    fn lock(&self) -> MutexGuard<'_, Vec<Offense>> {
        self.offenses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for OffenseSink {
    fn default() -> Self {
        Self::new()
    }
}
