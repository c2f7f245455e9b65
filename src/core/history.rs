//! Linear undo/redo history.
//!
//! `History` is the classic two-stack editor model: every forward mutation
//! records the prior value and invalidates any previously-undone future,
//! while undo and redo only traverse values that already existed. Neither
//! stack ever holds a partially-applied value.

use serde::{Deserialize, Serialize};

/// Two-stack undo/redo history over values of type `T`.
///
/// The caller owns the "current" value; `History` holds everything before
/// it (the undo stack) and everything undone past it (the redo stack),
/// both most-recent-last.
///
/// # Example
///
/// ```rust
/// use tally::History;
///
/// let mut history = History::new();
///
/// // a forward edit from 0 to 5 records the prior value
/// history.record(0);
/// assert_eq!(history.undo_depth(), 1);
///
/// // undo hands back the prior value in exchange for the current one
/// assert_eq!(history.undo(5), Some(0));
/// assert_eq!(history.redo(0), Some(5));
///
/// // a new forward edit invalidates the redo branch
/// history.undo(5);
/// history.record(0);
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History<T> {
    undo: Vec<T>,
    redo: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Rebuild a history from raw stacks, most-recent-last.
    pub fn from_parts(undo: Vec<T>, redo: Vec<T>) -> Self {
        Self { undo, redo }
    }

    /// Record a forward mutation: push the prior value onto the undo stack
    /// and drop the redo branch.
    pub fn record(&mut self, prior: T) {
        self.undo.push(prior);
        self.redo.clear();
    }

    /// Step back one entry.
    ///
    /// Takes the caller's current value, parks it on the redo stack, and
    /// returns the value to roll back to. Returns `None` (and stores
    /// nothing) when there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let prior = self.undo.pop()?;
        self.redo.push(current);
        Some(prior)
    }

    /// Step forward one undone entry.
    ///
    /// The mirror of [`History::undo`]: parks the current value on the undo
    /// stack and returns the value to re-apply. Returns `None` (and stores
    /// nothing) when there is nothing to redo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo would change anything.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of entries on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of entries on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Undo stack contents, oldest first.
    pub fn undo_entries(&self) -> &[T] {
        &self.undo
    }

    /// Redo stack contents, oldest first.
    pub fn redo_entries(&self) -> &[T] {
        &self.redo
    }
}
