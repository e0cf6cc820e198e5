//! Errors returned by state machine operations.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when changing a machine's state.
///
/// A failed operation never mutates the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State '{state}' is not declared in the configuration")]
    InvalidState { state: StateId },

    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: StateId, event: EventId },
}
