//! State machine with linear undo/redo history.

use crate::core::{Cause, Configuration, StateId, StateTransition, UndoHistory};
use crate::machine::error::MachineError;
use chrono::Utc;
use std::mem;

/// Finite-state machine driven by a declarative [`Configuration`].
///
/// The current state changes either directly ([`change_state`], [`reset`]),
/// through the transition table ([`trigger`]), or by walking the history
/// ([`undo`], [`redo`]). Forward changes are undoable; any forward change
/// discards pending redo entries.
///
/// [`change_state`]: StateMachine::change_state
/// [`reset`]: StateMachine::reset
/// [`trigger`]: StateMachine::trigger
/// [`undo`]: StateMachine::undo
/// [`redo`]: StateMachine::redo
///
/// # Example
///
/// ```rust
/// use retrace::{fsm_config, StateMachine};
///
/// let config = fsm_config! {
///     initial: green,
///     states: {
///         green: { timer => yellow },
///         yellow: { timer => red },
///         red: { timer => green },
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("timer").unwrap();
/// assert_eq!(machine.state(), "yellow");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "green");
/// assert!(!machine.undo());
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "yellow");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    current: StateId,
    history: UndoHistory,
    journal: Vec<StateTransition>,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The initial state is not checked against the declared states; see
    /// [`Configuration::validate`] for an explicit check.
    pub fn new(config: Configuration) -> Self {
        let current = config.initial.clone();
        let history = UndoHistory::new(config.initial.clone());
        Self {
            config,
            current,
            history,
            journal: Vec::new(),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get undo/redo stacks (pure)
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Applied changes since construction or the last [`clear_history`].
    ///
    /// [`clear_history`]: StateMachine::clear_history
    pub fn transitions(&self) -> &[StateTransition] {
        &self.journal
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Events the current state reacts to, in sorted order.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|definition| definition.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Move directly to `target`, bypassing the transition table.
    ///
    /// Fails with [`MachineError::InvalidState`] if `target` is not declared.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        self.jump(target, Cause::ChangeState)
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Fails with [`MachineError::InvalidTransition`] if the current state has
    /// no such transition. The target is taken from the configuration as-is.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let Some(target) = self
            .config
            .target(&self.current, event)
            .map(str::to_owned)
        else {
            tracing::trace!(state = %self.current, event, "rejected event without transition");
            return Err(MachineError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        self.advance(
            target,
            Cause::Trigger {
                event: event.to_string(),
            },
        );
        Ok(())
    }

    /// Move back to the initial state. The move is itself undoable.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.config.initial.clone();
        self.jump(&initial, Cause::Reset)
    }

    /// Declared states, optionally narrowed to those reacting to `event`.
    ///
    /// `None` and an empty event both return every declared state. The
    /// current state is not considered.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|event| !event.is_empty()) {
            None => self.config.states.keys().map(String::as_str).collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.transitions.contains_key(event))
                .map(|(id, _)| id.as_str())
                .collect(),
        }
    }

    /// Step back to the previous state. Returns `false` if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        match self.history.step_back(self.current.clone()) {
            Some(restored) => {
                self.restore(restored, Cause::Undo);
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone state. Returns `false` if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        match self.history.step_forward(self.current.clone()) {
            Some(restored) => {
                self.restore(restored, Cause::Redo);
                true
            }
            None => false,
        }
    }

    /// Forget all history and the journal.
    ///
    /// The undo stack is reset to the configured initial state, not the
    /// current one, so a later `undo` reports nothing to undo even when the
    /// machine sits elsewhere. The current state is left untouched.
    pub fn clear_history(&mut self) {
        self.history.clear(self.config.initial.clone());
        self.journal.clear();
        tracing::debug!(state = %self.current, "history cleared");
    }

    fn jump(&mut self, target: &str, cause: Cause) -> Result<(), MachineError> {
        if !self.config.contains_state(target) {
            tracing::trace!(state = %self.current, requested = target, "rejected undeclared state");
            return Err(MachineError::InvalidState {
                state: target.to_string(),
            });
        }
        self.advance(target.to_string(), cause);
        Ok(())
    }

    fn advance(&mut self, target: StateId, cause: Cause) {
        let previous = mem::replace(&mut self.current, target);
        self.history.record(previous.clone());
        self.log(previous, cause);
    }

    fn restore(&mut self, restored: StateId, cause: Cause) {
        let previous = mem::replace(&mut self.current, restored);
        self.log(previous, cause);
    }

    fn log(&mut self, from: StateId, cause: Cause) {
        tracing::debug!(from = %from, to = %self.current, cause = ?cause, "state changed");
        self.journal.push(StateTransition {
            from,
            to: self.current.clone(),
            cause,
            timestamp: Utc::now(),
        });
    }
}
