//! The ledger itself - an ordered, in-memory task collection

use std::collections::HashMap;
use tracing::debug;

use super::error::{LedgerError, Result};
use super::model::{Priority, Task};
use super::time::convert_to_minutes;

/// Minutes assumed for a description with no recorded history.
const DEFAULT_PREDICTED_MINUTES: f64 = 30.0;

/// Ordered collection of tasks plus a duration history used for estimates.
///
/// Callers hold an instance; there is no ambient global. Sequence numbers
/// stay a dense `1..=len` across removals.
#[derive(Debug, Default)]
pub struct Ledger {
    tasks: Vec<Task>,

    /// Durations recorded per exact description by an external collaborator.
    /// Nothing in this crate writes to it; see `predict_duration`.
    past_durations: HashMap<String, f64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task and return a snapshot of it.
    ///
    /// The priority comes from a keyword scan of the description, the
    /// duration from the `H:M:S` time string. Malformed time input never
    /// fails; its components coerce to 0.
    pub fn add(&mut self, description: &str, time_string: &str, category: &str) -> Task {
        let task = Task {
            sequence_number: self.tasks.len() + 1,
            description: description.to_string(),
            priority: Priority::classify(description),
            duration_minutes: convert_to_minutes(time_string),
            category: category.to_string(),
        };

        debug!(
            sequence = task.sequence_number,
            priority = %task.priority,
            minutes = task.duration_minutes,
            "Added task"
        );

        let view = task.clone();
        self.tasks.push(task);
        view
    }

    /// Replace the description and duration of the task at `index`.
    ///
    /// Priority and category are left untouched; in particular the priority
    /// is NOT re-derived from the new description.
    pub fn update(&mut self, index: usize, description: &str, time_string: &str) -> Result<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;

        task.description = description.to_string();
        task.duration_minutes = convert_to_minutes(time_string);

        debug!(index, "Updated task");
        Ok(())
    }

    /// Delete the task at `index` and renumber the remainder.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }

        self.tasks.remove(index);
        self.renumber();

        debug!(index, remaining = self.tasks.len(), "Removed task");
        Ok(())
    }

    fn renumber(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.sequence_number = i + 1;
        }
    }

    /// Read-only view of the collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks ordered by priority rank, High first.
    ///
    /// The sort is stable: tasks of equal priority keep their insertion
    /// order. The stored collection is not mutated.
    pub fn sorted(&self) -> Vec<Task> {
        let mut sorted = self.tasks.clone();
        sorted.sort_by_key(|t| t.priority.rank());
        sorted
    }

    /// Prefix-greedy allocation into a time budget.
    ///
    /// Walks the priority-sorted sequence, including each task that fits the
    /// remaining budget, and stops at the first one that does not. Later,
    /// smaller tasks are never considered; this is a prefix packer, not a
    /// knapsack solver. See [`Ledger::suggest`] for the skip-and-continue
    /// variant.
    pub fn allocate(&self, budget_minutes: f64) -> Vec<Task> {
        let mut remaining = budget_minutes;
        let mut allocated = Vec::new();

        for task in self.sorted() {
            if task.duration_minutes > remaining {
                break;
            }
            remaining -= task.duration_minutes;
            allocated.push(task);
        }

        allocated
    }

    /// Skip-and-continue greedy suggestion into a time budget.
    ///
    /// Same ordering as [`Ledger::allocate`], but a task that does not fit
    /// is skipped rather than ending the scan, so any later task that fits
    /// the remaining budget is still included. The two policies are kept
    /// distinct intentionally.
    pub fn suggest(&self, budget_minutes: f64) -> Vec<Task> {
        let mut used = 0.0;
        let mut order = Vec::new();

        for task in self.sorted() {
            if used + task.duration_minutes <= budget_minutes {
                used += task.duration_minutes;
                order.push(task);
            }
        }

        order
    }

    /// Duration estimate for a description.
    ///
    /// Returns the recorded duration on an exact description match,
    /// otherwise a flat 30-minute default. The history table is populated
    /// by an external collaborator, never by this crate.
    pub fn predict_duration(&self, description: &str) -> f64 {
        self.past_durations
            .get(description)
            .copied()
            .unwrap_or(DEFAULT_PREDICTED_MINUTES)
    }
}
