//! Undo/redo bookkeeping and the transition journal.
//!
//! [`UndoHistory`] holds the two stacks that make state changes reversible.
//! [`StateTransition`] records are appended to a machine's journal whenever
//! its current state changes, whatever the cause.

use super::config::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a recorded state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cause {
    /// Direct override through `change_state`
    ChangeState,
    /// Named event resolved through the transition table
    Trigger { event: EventId },
    /// Jump back to the initial state
    Reset,
    Undo,
    Redo,
}

/// Record of a single applied state change.
///
/// # Example
///
/// ```rust
/// use retrace::core::{Cause, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "green".to_string(),
///     to: "yellow".to_string(),
///     cause: Cause::Trigger { event: "timer".to_string() },
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "yellow");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: StateId,
    /// The state being transitioned to
    pub to: StateId,
    pub cause: Cause,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Linear undo/redo history.
///
/// The undo stack is never empty: its bottom entry is the bootstrap state
/// (the configured initial state) and is never popped. The redo stack only
/// holds entries between an undo and the next recorded change.
///
/// # Example
///
/// ```rust
/// use retrace::core::UndoHistory;
///
/// let mut history = UndoHistory::new("a");
/// assert!(!history.can_undo());
///
/// history.record("a".to_string());
/// assert_eq!(history.step_back("b".to_string()), Some("a".to_string()));
/// assert_eq!(history.step_forward("a".to_string()), Some("b".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UndoHistory {
    undo: Vec<StateId>,
    redo: Vec<StateId>,
}

impl UndoHistory {
    /// Create a history whose only entry is the bootstrap state.
    pub fn new(bootstrap: impl Into<StateId>) -> Self {
        Self {
            undo: vec![bootstrap.into()],
            redo: Vec::new(),
        }
    }

    /// Record the state being left by a forward change.
    ///
    /// Any pending redo entries are discarded.
    pub fn record(&mut self, previous: StateId) {
        self.redo.clear();
        self.undo.push(previous);
    }

    /// Step back from `current`, returning the state to restore.
    ///
    /// Returns `None` without touching either stack when only the bootstrap
    /// entry remains.
    pub fn step_back(&mut self, current: StateId) -> Option<StateId> {
        if !self.can_undo() {
            return None;
        }
        let restored = self.undo.pop()?;
        self.redo.push(current);
        Some(restored)
    }

    /// Step forward from `current`, returning the state to re-apply.
    pub fn step_forward(&mut self, current: StateId) -> Option<StateId> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        Some(restored)
    }

    /// Reset to a single bootstrap entry and drop all redo entries.
    pub fn clear(&mut self, bootstrap: impl Into<StateId>) {
        self.undo.clear();
        self.undo.push(bootstrap.into());
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo stack, oldest first.
    pub fn undo_stack(&self) -> &[StateId] {
        &self.undo
    }

    /// Redo stack, oldest first.
    pub fn redo_stack(&self) -> &[StateId] {
        &self.redo
    }
}
